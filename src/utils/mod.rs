mod maths_utils;
mod perf;

pub(crate) use maths_utils::{get_max, get_min, mean, median_upper};
