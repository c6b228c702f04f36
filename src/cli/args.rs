use super::parse::parse_rounding_mode;
use clap::Args;
use gradescale_core::engine::{ConversionOptions, RoundingMode};

/// Source and target systems
#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Source notation system id
    #[arg(long, short)]
    pub from: String,

    /// Target notation system id
    #[arg(long, short)]
    pub to: String,
}

/// Flags mapped onto `ConversionOptions`
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Rounding mode: nearest, floor or ceil (default from config)
    #[arg(long, value_parser = parse_rounding_mode)]
    pub rounding: Option<RoundingMode>,

    /// Keep the source system's precision instead of the target's
    #[arg(long)]
    pub preserve_precision: bool,

    /// Clamp out-of-range source values instead of rejecting them
    #[arg(long)]
    pub allow_partial: bool,
}

impl OptionArgs {
    /// Overlay flags on configured defaults
    pub fn resolve(&self, defaults: &ConversionOptions) -> ConversionOptions {
        ConversionOptions {
            preserve_precision: self.preserve_precision || defaults.preserve_precision,
            rounding_mode: self.rounding.unwrap_or(defaults.rounding_mode),
            allow_partial_conversion: self.allow_partial || defaults.allow_partial_conversion,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Grade to convert
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    #[command(flatten)]
    pub pair: PairArgs,

    #[command(flatten)]
    pub options: OptionArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Grades to convert, in order
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub values: Vec<f64>,

    #[command(flatten)]
    pub pair: PairArgs,

    #[command(flatten)]
    pub options: OptionArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Grade to check
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Notation system id
    #[arg(long, short)]
    pub system: String,
}
