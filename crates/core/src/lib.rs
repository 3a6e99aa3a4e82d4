pub mod batch;
pub mod config;
pub mod metrics;
pub mod pipeline;
pub mod testing;

pub use batch::{convert_batch, BatchError, BatchOutcome, BatchResult};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, LimitsConfig,
    ServerConfig,
};
pub use pipeline::{convert, FitMode, PipelineError, ResizeMode, TransformOptions};
