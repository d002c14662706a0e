/// Error returned from [crate::BiasModelTrait] evaluation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("{model} expects {expected} parameters, got {actual}")]
    WrongParameterCount {
        model: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(
        "parameter vector length {params} is not a multiple of the {arity} parameters per component"
    )]
    RaggedParameterBlocks { params: usize, arity: usize },

    #[error("{components} parameter blocks but stimulus array has {rows} rows")]
    ComponentMismatch { components: usize, rows: usize },

    #[error("{model} has no fixed parameter count and cannot be used as a component")]
    VariableArityComponent { model: &'static str },

    #[error("stimulus has {x} trials but observations have {y}")]
    DataLengthMismatch { x: usize, y: usize },
}

/// Error returned from [crate::ObjectiveTrait] evaluation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LossError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// No residuals survive trimming. The per-tail cut of floor(n · f / 2)
    /// always leaves the middle of a nonempty sample, so this fires only for
    /// empty data.
    #[error("no residuals left after trimming {cut} per tail of {len}")]
    DegenerateTrim { len: usize, cut: usize },

    #[error("bias-augmented loss needs at least the offset parameter")]
    MissingBiasParameter,
}

/// Error returned from the lag helpers
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LagError {
    #[error("lag offset must be nonzero: negative for past trials, positive for future")]
    ZeroLag,
}

/// Error returned from [crate::binned_statistic]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BinningError {
    #[error("overlap {overlap} too large for {n_bins} bins: 2 * overlap must stay below n_bins")]
    OverlapTooLarge { overlap: usize, n_bins: usize },

    #[error("grouping variable has {grouping} entries but values have {values}")]
    LengthMismatch { grouping: usize, values: usize },
}

/// Error returned from [crate::MeanBand]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BandError {
    #[error("sample matrix of shape ({rows}, {cols}) does not align with {len_x} x-points")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len_x: usize,
    },

    #[error("percentile bounds must satisfy 0 <= lower < upper <= 100")]
    InvalidPercentiles,
}
