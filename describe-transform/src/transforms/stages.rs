//! Individual transformation stages
//!
//! Each stage implements [`Runnable`] and can be composed into a pipeline.

use crate::describe::{describe_program, DescribeOptions};
use crate::transforms::{Runnable, TransformError};
use describe_ast::{to_treeviz_str, SourceFile};
use tracing::debug;

/// JSON text → SourceFile
pub struct DecodeJson;

impl Runnable<String, SourceFile> for DecodeJson {
    fn run(&self, input: String) -> Result<SourceFile, TransformError> {
        SourceFile::from_json_str(&input).map_err(|e| TransformError::stage("DecodeJson", e))
    }
}

/// SourceFile → pretty-printed JSON text
pub struct EncodeJson;

impl Runnable<SourceFile, String> for EncodeJson {
    fn run(&self, input: SourceFile) -> Result<String, TransformError> {
        input
            .to_json_string_pretty()
            .map_err(|e| TransformError::stage("EncodeJson", e))
    }
}

/// SourceFile → treeviz text
pub struct Treeviz;

impl Runnable<SourceFile, String> for Treeviz {
    fn run(&self, input: SourceFile) -> Result<String, TransformError> {
        Ok(to_treeviz_str(&input))
    }
}

/// Runs the describe rewrite over the program
///
/// Never fails: elements with an unsupported marker value are skipped, not reported as
/// errors.
#[derive(Debug, Clone, Default)]
pub struct DescribeStage {
    options: DescribeOptions,
}

impl DescribeStage {
    pub fn new(options: DescribeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DescribeOptions {
        &self.options
    }
}

impl Runnable<SourceFile, SourceFile> for DescribeStage {
    fn run(&self, mut input: SourceFile) -> Result<SourceFile, TransformError> {
        let report = describe_program(&mut input.program, &self.options);
        debug!(
            rewritten = report.rewritten,
            skipped = report.skipped,
            import_injected = report.import_injected,
            "describe pass finished"
        );
        Ok(input)
    }
}
