//! Section headers and sub task banners.

use crate::formatter::Formatter;
use crate::layout::{display_width, fill, remaining, split_pad, COLON_FILL, SUB_TASK_FILL_LEN};

impl Formatter {
    /// Centers the uppercased text between runs of `:`.
    ///
    /// The two runs add up to the target width minus the text width, with
    /// an odd column going to the left run.
    ///
    /// ```text
    /// ::::::::::::::::::::::::::::: I AM A HEADER ::::::::::::::::::::::::::::
    /// ```
    pub fn header(&self, text: &str) -> String {
        let upper = text.to_uppercase();
        let pad = remaining("header", self.width(), display_width(&upper));
        let (left, right) = split_pad(pad);

        format!(
            "\n{} {} {}\n",
            fill(COLON_FILL, left),
            upper,
            fill(COLON_FILL, right)
        )
    }

    /// Banner opening a sub task. The fill never depends on the text.
    ///
    /// ```text
    /// ::::::::: I AM A SUB TASK
    /// ```
    pub fn sub_task(&self, text: &str) -> String {
        format!(
            "\n{} {}\n",
            fill(COLON_FILL, SUB_TASK_FILL_LEN),
            text.to_uppercase()
        )
    }
}
