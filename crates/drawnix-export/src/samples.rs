//! Literal documents returned instead of generated output.
//!
//! An empty board yields a sample document so viewers always have something
//! to show; a failed conversion yields a short failure document. Both exist in
//! each [`Locale`], except the Mermaid sample which is the same everywhere.

use crate::{config::Locale, export::ExportFormat};

const MARKDOWN_SAMPLE_ZH: &str = "# 我开始了

- 让我看看是谁搞出了这个 bug 🕵️ ♂️ 🔍
  - 😯 💣
    - 原来是我 👈 🎯 💘

- 竟然不可以运行，为什么呢 🚫 ⚙️ ❓
  - 竟然可以运行了，为什么呢？🎢 ✨
    - 🤯 ⚡ ➡️ 🎉

- 能运行起来的 🐞 🚀
  - 就不要去动它 🛑 ✋
    - 👾 💥 🏹 🎯";

const MARKDOWN_SAMPLE_EN: &str = "# Here we go

- Let me find out who wrote this bug 🕵️ ♂️ 🔍
  - 😯 💣
    - It was me all along 👈 🎯 💘

- It doesn't run, why is that 🚫 ⚙️ ❓
  - Now it runs, why is that? 🎢 ✨
    - 🤯 ⚡ ➡️ 🎉

- If it runs 🐞 🚀
  - don't touch it 🛑 ✋
    - 👾 💥 🏹 🎯";

const MARKDOWN_FAILURE_ZH: &str = "# 转换失败\n\n转换过程中发生错误，请检查画布内容或稍后重试。";

const MARKDOWN_FAILURE_EN: &str = "# Conversion failed\n\n\
    An error occurred during conversion. Check the board content or try again later.";

const MERMAID_SAMPLE: &str = "flowchart TD
    A[Christmas] -->|Get money| B(Go shopping)
    B --> C{Let me think}
    C -->|One| D[Laptop]
    C -->|Two| E[iPhone]
    C -->|Three| F[Car]";

const MERMAID_FAILURE_ZH: &str = "flowchart TD\n    Error[\"转换失败\"]\n    Info[\"请检查画布内容\"]\n    \n    Error --> Info\n    \n    %% 转换过程中发生错误";

const MERMAID_FAILURE_EN: &str = "flowchart TD\n    Error[\"Conversion failed\"]\n    Info[\"Check the board content\"]\n    \n    Error --> Info\n    \n    %% An error occurred during conversion";

/// Returns the document shown for a board with nothing to convert.
pub fn sample(format: ExportFormat, locale: Locale) -> &'static str {
    match (format, locale) {
        (ExportFormat::Markdown, Locale::Zh) => MARKDOWN_SAMPLE_ZH,
        (ExportFormat::Markdown, Locale::En) => MARKDOWN_SAMPLE_EN,
        (ExportFormat::Mermaid, _) => MERMAID_SAMPLE,
    }
}

/// Returns the document shown when conversion fails.
pub fn failure(format: ExportFormat, locale: Locale) -> &'static str {
    match (format, locale) {
        (ExportFormat::Markdown, Locale::Zh) => MARKDOWN_FAILURE_ZH,
        (ExportFormat::Markdown, Locale::En) => MARKDOWN_FAILURE_EN,
        (ExportFormat::Mermaid, Locale::Zh) => MERMAID_FAILURE_ZH,
        (ExportFormat::Mermaid, Locale::En) => MERMAID_FAILURE_EN,
    }
}
