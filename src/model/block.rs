use crate::model::config::FontsConfig;

/// Ordered lines inserted as a unit. The last line is the idempotence key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionBlock {
    pub label: &'static str,
    pub lines: Vec<String>,
    /// Drop lines before the key that the document already carries.
    pub dedup: bool,
}

impl InsertionBlock {
    pub fn key(&self) -> &str {
        self.lines.last().map(|line| line.trim()).unwrap_or_default()
    }

    pub fn is_applied(&self, document: &str) -> bool {
        let key = self.key();
        !key.is_empty() && document.contains(key)
    }

    /// Lines still missing from `document`, in block order.
    pub fn pending_lines(&self, document: &str) -> Vec<&str> {
        let last = self.lines.len().saturating_sub(1);
        self.lines
            .iter()
            .enumerate()
            .filter(|(idx, line)| {
                !(self.dedup && *idx < last && document.contains(line.trim()))
            })
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

pub fn icon_font_block() -> InsertionBlock {
    InsertionBlock {
        label: "Material Symbols icon font",
        lines: vec![
            "  <!-- Google Material Icons -->".to_string(),
            r#"  <link href="https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined" rel="stylesheet" />"#
                .to_string(),
        ],
        dedup: false,
    }
}

pub fn web_font_block(fonts: &FontsConfig) -> InsertionBlock {
    InsertionBlock {
        label: "web font",
        lines: vec![
            "  <!-- Google Fonts -->".to_string(),
            r#"  <link rel="preconnect" href="https://fonts.googleapis.com" />"#.to_string(),
            r#"  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />"#
                .to_string(),
            format!(
                r#"  <link href="https://fonts.googleapis.com/css2?family={}&display=swap" rel="stylesheet" />"#,
                fonts.family_query()
            ),
        ],
        dedup: true,
    }
}
