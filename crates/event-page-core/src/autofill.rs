//! Project Autofill
//!
//! Decides whether a repository URL can be autofilled, tracks the indicator
//! next to the URL field, and maps the autofill response onto form fields.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::AutofillData;
use crate::error::GlueResult;

/// Host fragments the server knows how to import from
pub const SUPPORTED_SOURCES: &[&str] = &["//github.com/", "//bitbucket.com/", "//make.opendata.ch/wiki/"];

pub const OVERWRITE_PROMPT: &str = "Are you sure you wish to overwrite this form?";

/// Characters left as-is in the `url` query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Whether a URL points at a supported source.
///
/// The fragment must occur after the first character, so a value that
/// starts with `//github.com/` is rejected.
pub fn is_supported(url: &str) -> bool {
    SUPPORTED_SOURCES
        .iter()
        .any(|source| matches!(url.find(source), Some(pos) if pos > 0))
}

/// Autofill request URL for `url` against `endpoint`
pub fn autofill_request_url(endpoint: &str, url: &str) -> String {
    format!("{}?url={}", endpoint, utf8_percent_encode(url, QUERY_VALUE))
}

/// An already filled-in project name must be confirmed before overwriting
pub fn needs_overwrite_confirmation(current_name: Option<&str>) -> bool {
    current_name.is_some_and(|name| !name.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorIcon {
    #[default]
    EmptyCircle,
    CheckCircle,
}

impl IndicatorIcon {
    pub fn css_class(&self) -> &'static str {
        match self {
            IndicatorIcon::EmptyCircle => "fa-circle-o",
            IndicatorIcon::CheckCircle => "fa-check-circle-o",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorColor {
    #[default]
    Red,
    Green,
    /// Request in flight
    Blue,
}

impl IndicatorColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorColor::Red => "red",
            IndicatorColor::Green => "green",
            IndicatorColor::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPhase {
    #[default]
    Ready,
    Waiting,
}

impl ButtonPhase {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonPhase::Ready => "Update now",
            ButtonPhase::Waiting => "Please wait ...",
        }
    }

    pub fn disabled(&self) -> bool {
        *self == ButtonPhase::Waiting
    }
}

/// Icon + button state next to the URL field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicator {
    pub icon: IndicatorIcon,
    pub color: IndicatorColor,
    pub button_visible: bool,
    pub button: ButtonPhase,
}

impl Indicator {
    /// Red empty circle, hidden button
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-validate against the field value. `None` leaves the indicator
    /// unchanged; returns whether it was applied.
    pub fn check(&mut self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        let supported = is_supported(value);
        self.icon = if supported { IndicatorIcon::CheckCircle } else { IndicatorIcon::EmptyCircle };
        self.color = if supported { IndicatorColor::Green } else { IndicatorColor::Red };
        self.button_visible = supported;
        true
    }

    pub fn begin_fetch(&mut self) {
        self.color = IndicatorColor::Blue;
        self.button = ButtonPhase::Waiting;
    }

    /// Apply the fetch result and return the field writes.
    ///
    /// A failed fetch leaves the button waiting and writes nothing.
    pub fn finish_fetch(&mut self, result: GlueResult<AutofillData>) -> Vec<FieldUpdate> {
        match result {
            Ok(data) => {
                self.color = IndicatorColor::Green;
                self.button = ButtonPhase::Ready;
                data.field_updates()
            }
            Err(e) => {
                log::warn!("[autofill] fetch failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Project form fields written by autofill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Summary,
    Longtext,
    WebpageUrl,
    SourceUrl,
    ImageUrl,
}

impl FormField {
    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Summary => "summary",
            FormField::Longtext => "longtext",
            FormField::WebpageUrl => "webpage_url",
            FormField::SourceUrl => "source_url",
            FormField::ImageUrl => "image_url",
        }
    }

    /// Longtext is a textarea, everything else an input
    pub fn is_textarea(&self) -> bool {
        *self == FormField::Longtext
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: FormField,
    pub value: String,
}

impl AutofillData {
    /// Form writes for a response.
    ///
    /// Inputs are always overwritten, an absent value clearing them; the
    /// description textarea is only written when present.
    pub fn field_updates(&self) -> Vec<FieldUpdate> {
        [
            (FormField::Name, &self.name),
            (FormField::Summary, &self.summary),
            (FormField::Longtext, &self.description),
            (FormField::WebpageUrl, &self.homepage_url),
            (FormField::SourceUrl, &self.source_url),
            (FormField::ImageUrl, &self.image_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| match value {
            Some(value) => Some(FieldUpdate { field, value: value.clone() }),
            None if field.is_textarea() => None,
            None => Some(FieldUpdate { field, value: String::new() }),
        })
        .collect()
    }
}
