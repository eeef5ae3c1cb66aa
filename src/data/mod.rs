mod parser;
mod samples;
mod source;

pub use {
    parser::{IngestError, parse_delimited, read_light_curve, to_delimited_text},
    samples::{SampleKind, generate_sample},
    source::{FileSource, LightCurveSource, SyntheticSource, load_all, write_light_curve},
};
