use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;
use crate::model::block::{InsertionBlock, icon_font_block, web_font_block};
use crate::model::config::FontsConfig;
use crate::model::file_tree::{FileTree, join};
use crate::model::workspace::ProjectDescriptor;
use crate::msg::Outcome;

static HEAD_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head>").expect("valid head close regex"));

/// Blocks in insertion order. Each lands directly before `</head>`, so the
/// last one in this list ends up closest to the tag.
pub fn blocks(fonts: &FontsConfig) -> Vec<InsertionBlock> {
    vec![web_font_block(fonts), icon_font_block()]
}

/// Insert every block that is not yet present. Returns the new text and one
/// outcome per block.
pub fn patch_document(document: &str, blocks: &[InsertionBlock]) -> (String, Vec<Outcome>) {
    let mut text = document.to_string();
    let mut outcomes = Vec::with_capacity(blocks.len());

    for block in blocks {
        if block.is_applied(&text) {
            outcomes.push(Outcome::Skipped(format!("{} already present", block.label)));
            continue;
        }

        let Some(anchor) = HEAD_CLOSE_RE.find(&text).map(|m| m.start()) else {
            outcomes.push(Outcome::Warning(format!(
                "no </head> tag found, {} not inserted",
                block.label
            )));
            continue;
        };

        let mut insertion = String::new();
        if !text[..anchor].ends_with('\n') {
            insertion.push('\n');
        }
        for line in block.pending_lines(&text) {
            insertion.push_str(line);
            insertion.push('\n');
        }

        text.insert_str(anchor, &insertion);
        outcomes.push(Outcome::Applied(format!("Added {} to index.html", block.label)));
    }

    (text, outcomes)
}

pub fn apply(
    tree: &mut dyn FileTree,
    project: &ProjectDescriptor,
    fonts: &FontsConfig,
) -> Result<Vec<Outcome>> {
    let path = join(&project.source_root, "index.html");
    let Some(document) = tree.read_optional(&path)? else {
        tracing::debug!("{path} not found, skipping font links");
        return Ok(vec![Outcome::Skipped(format!("{path} not found"))]);
    };

    let (patched, outcomes) = patch_document(&document, &blocks(fonts));

    for outcome in &outcomes {
        match outcome {
            Outcome::Applied(text) => tracing::info!("{path}: {text}"),
            Outcome::Warning(text) => tracing::warn!("{path}: {text}"),
            Outcome::Skipped(text) => tracing::debug!("{path}: {text}"),
        }
    }

    if patched != document {
        tree.overwrite(&path, &patched)?;
    }

    Ok(outcomes)
}
