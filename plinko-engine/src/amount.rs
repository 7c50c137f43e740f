use std::fmt;

/// Fixed step applied by the editor's increment/decrement controls.
pub const AMOUNT_STEP: f64 = 0.0001;

/// Render an amount with the display precision of 4 fraction digits.
pub fn format_amount(value: f64) -> String {
    format!("{:.4}", value)
}

/// Why a piece of amount text was refused at the validation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    Malformed(String),
    Negative(String),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Malformed(text) => write!(f, "malformed amount '{}'", text),
            AmountError::Negative(text) => write!(f, "negative amount '{}'", text),
        }
    }
}

impl std::error::Error for AmountError {}

/// Parse amount text into a non-negative finite stake.
///
/// This is the single validation boundary between free-text editing and
/// anything that leaves the process. Committing stays permissive; callers
/// that wager the committed value go through here first.
pub fn parse_amount(text: &str) -> Result<f64, AmountError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| AmountError::Malformed(text.to_string()))?;
    if !value.is_finite() {
        return Err(AmountError::Malformed(text.to_string()));
    }
    if value < 0.0 {
        return Err(AmountError::Negative(text.to_string()));
    }
    Ok(value)
}

/// Draft/commit state machine for the bet amount.
///
/// The draft only becomes the wagered amount on an explicit commit;
/// cancelling reverts the draft to the committed value. Free-text edits are
/// stored verbatim, so the draft (and a committed value produced from it)
/// may transiently hold non-numeric text.
#[derive(Debug, Clone)]
pub struct AmountEditor {
    draft: String,
    committed: String,
    panel_open: bool,
}

impl Default for AmountEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl AmountEditor {
    pub fn new() -> Self {
        Self {
            draft: format_amount(0.0),
            committed: format_amount(0.0),
            panel_open: false,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Open the editing panel, seeding the draft from the committed amount.
    pub fn open_panel(&mut self) {
        self.panel_open = true;
        self.draft = self.committed.clone();
    }

    /// Step the draft by `delta`, clamping at zero and reformatting to the
    /// display precision. A draft that does not parse as a finite number
    /// counts as zero before the step is applied.
    pub fn adjust(&mut self, delta: f64) {
        let current = self
            .draft
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        let mut next = current + delta;
        if next < 0.0 {
            next = 0.0;
        }
        self.draft = format_amount(next);
    }

    /// Replace the draft with raw text, no validation at keystroke time.
    pub fn set_draft_text(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Make the draft the committed amount, verbatim, and close the panel.
    pub fn commit(&mut self) {
        self.committed = self.draft.clone();
        self.panel_open = false;
    }

    /// Discard edits and close the panel. The committed amount is untouched.
    pub fn cancel(&mut self) {
        self.draft = self.committed.clone();
        self.panel_open = false;
    }
}
