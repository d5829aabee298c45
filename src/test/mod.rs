mod accumulator;
mod end_to_end;
mod flow_metrics;
mod sampler;
