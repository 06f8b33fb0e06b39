use thiserror::Error;

/// Top-level error type for the geometry kernel.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl KernelError {
    /// Classifies the error into the kernel's failure taxonomy.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(_) => ErrorKind::InvalidArgument,
            Self::Transform(TransformError::SingularMatrix) => ErrorKind::ArithmeticError,
            Self::Transform(TransformError::Unsupported { .. }) => ErrorKind::UnsupportedOperation,
        }
    }
}

/// Coarse classification of kernel failures.
///
/// None of these are transient: every one signals a violated precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    ArithmeticError,
    UnsupportedOperation,
}

/// Errors related to curves and their parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("curve has no segments")]
    EmptyCurve,
}

/// Errors related to affine transforms.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("matrix is singular")]
    SingularMatrix,

    #[error("cannot concatenate {left} transform with {right} transform")]
    Unsupported {
        left: &'static str,
        right: &'static str,
    },
}

/// Convenience type alias for results using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let err: KernelError = GeometryError::EmptyCurve.into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: KernelError = TransformError::SingularMatrix.into();
        assert_eq!(err.kind(), ErrorKind::ArithmeticError);

        let err: KernelError = TransformError::Unsupported {
            left: "matrix",
            right: "custom",
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn messages_name_the_precondition() {
        let err: KernelError = TransformError::SingularMatrix.into();
        assert_eq!(err.to_string(), "matrix is singular");

        let err: KernelError = GeometryError::ParameterOutOfRange {
            parameter: "t",
            value: 3.0,
            min: 0.0,
            max: 2.0,
        }
        .into();
        assert_eq!(err.to_string(), "parameter t = 3 is out of range [0, 2]");
    }
}
