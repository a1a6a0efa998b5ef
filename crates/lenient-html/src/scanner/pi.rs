//! `<?target content?>` processing instructions.
//!
//! The target keeps its leading `?`, so `<?php echo 1; ?>` has target `?php`
//! and content `echo 1; `. Script targets are handed to the configured
//! [`ScriptEvaluator`](crate::ScriptEvaluator).

use lenient_common::{DiagnosticCode, Position};
use lenient_dom::{ElementData, Fragment, NodeType, ProcessingInstructionData};

use super::{HtmlScanner, Scan};
use crate::script::is_script_target;

const OPEN: &str = "<?";
const CLOSE: &str = "?>";

/// Vertical tab does not end a target.
const fn is_target_end(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}

/// Tag name of the element that replaces a failed script instruction.
pub const SCRIPT_ERROR_TAG: &str = "script_pi_error";

impl HtmlScanner<'_> {
    pub(crate) fn scan_processing_instruction(&mut self) -> Option<Scan> {
        if !self.cursor.starts_with(OPEN) {
            return None;
        }
        let position = self.cursor.position();
        let caret = self.cursor.caret();
        let end = self.cursor.end();

        // The target ends at the first whitespace, so `<?xml?>` has no
        // boundary and `<?xml?>\n` has target `?xml?>`.
        let Some(boundary) = self.cursor.find_byte(caret + OPEN.len(), end, is_target_end) else {
            self.report(DiagnosticCode::IgnoringProcessingInstruction, position, Vec::new());
            let text = self.cursor.remaining().to_string();
            self.cursor.advance_to_end();
            return Some(Scan::Complete(Fragment::leaf(NodeType::Text(text), position)));
        };

        let target = self.cursor.slice(caret + 1, boundary).to_string();
        let mut start = boundary;
        if matches!(self.cursor.byte_at(start), Some(b' ' | b'\t')) {
            start += 1;
        }
        let content = if let Some(close) = self.cursor.find(CLOSE, boundary + 1) {
            let content = self.cursor.slice(start, close).to_string();
            self.cursor.advance(close + CLOSE.len());
            content
        } else {
            self.report(DiagnosticCode::StartedButNotClosed, position, vec![target.clone()]);
            let content = self.cursor.slice(start, end).to_string();
            self.cursor.advance_to_end();
            content
        };

        Some(Scan::Complete(self.finish_processing_instruction(
            target, content, position,
        )))
    }

    /// Build the node, running the script hook for script targets.
    fn finish_processing_instruction(
        &mut self,
        target: String,
        content: String,
        position: Position,
    ) -> Fragment {
        let payload = position.shifted(1 + target.chars().count());
        let outcome = match self.evaluator.as_deref_mut() {
            Some(evaluator) if is_script_target(&target) => {
                Some(evaluator.evaluate(&content, &self.source_id))
            }
            _ => None,
        };

        match outcome {
            Some(Err(failure)) => {
                self.report(DiagnosticCode::EmbeddedScriptError, position, vec![target]);
                Fragment::leaf(
                    NodeType::Element(ElementData::new(SCRIPT_ERROR_TAG)),
                    position,
                )
                .with_child(Fragment::leaf(NodeType::CData(failure.trace), payload))
            }
            Some(Ok(nodes)) => {
                let mut fragment = Fragment::leaf(
                    NodeType::ProcessingInstruction(ProcessingInstructionData { target, content }),
                    position,
                );
                fragment
                    .children
                    .extend(nodes.into_iter().map(|node| Fragment::leaf(node, payload)));
                fragment
            }
            None => Fragment::leaf(
                NodeType::ProcessingInstruction(ProcessingInstructionData { target, content }),
                position,
            ),
        }
    }
}
