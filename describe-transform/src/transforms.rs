//! Transform pipeline infrastructure
//!
//! Any stage can be chained with another if their types line up:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(DecodeJson)                               // String → SourceFile
//!     .then(DescribeStage::new(options))              // SourceFile → SourceFile
//!     .then(EncodeJson);                              // SourceFile → String
//! ```
//!
//! `Runnable<I, O>` is the interface a single stage implements. `Transform<I, O>` wraps a
//! boxed closure and provides `.then()` for composition; the compiler checks that each
//! stage's input matches the previous output.
//!
//! Common pipelines are pre-built as `once_cell::sync::Lazy` statics in [`standard`], and
//! [`SourceLoader`](crate::loader::SourceLoader) offers shortcuts over them.
//!
//! - [`stages`]: the individual stages (JSON decode/encode, describe, treeviz)
//! - [`standard`]: pre-built combinations

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Generic error with message
    #[error("{0}")]
    Error(String),
    /// Stage failed with specific error
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl TransformError {
    pub fn stage(stage: &str, message: impl ToString) -> Self {
        TransformError::StageFailed {
            stage: stage.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain `stage` after this transform, producing a transform from `I` to `O2`
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static pipeline after this transform
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
