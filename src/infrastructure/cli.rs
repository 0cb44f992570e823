use clap::Parser;

use crate::infrastructure::capability::HoverSupport;
use crate::infrastructure::config::Config;
use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(long, value_enum, help = "Override hover detection")]
    pub hover: Option<HoverSupport>,

    #[arg(long, value_name = "N", help = "Number of trail nodes")]
    pub trail_length: Option<usize>,
}

impl Cli {
    /// Applies command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(hover) = self.hover {
            config.hover = hover;
        }
        if let Some(length) = self.trail_length {
            config.trail.length = length;
            // An explicit coefficient list no longer fits a different length.
            if config
                .trail
                .alphas
                .as_ref()
                .is_some_and(|alphas| alphas.len() != length)
            {
                config.trail.alphas = None;
            }
        }
    }
}
