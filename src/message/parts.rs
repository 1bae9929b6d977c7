//! Leaf sub-objects of an embed: footer, thumbnail, image, author and field.
//!
//! Each is a plain data holder. Setters overwrite, and required fields and
//! length caps are only checked by `serialize`.

use super::error::{ValidationError, check_length, require};
use super::limits;
use super::wire::{self, AuthorPayload, FieldPayload, FooterPayload, MediaPayload};

/// Footer of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footer {
    text: Option<String>,
    icon_url: Option<String>,
}

impl Footer {
    /// Creates an empty footer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the footer text (required, at most 2048 characters).
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the footer icon URL.
    pub fn icon(&mut self, icon_url: impl Into<String>) -> &mut Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    pub(crate) fn payload(&self) -> Result<FooterPayload<'_>, ValidationError> {
        let text = require("text", self.text.as_deref())?;
        check_length("text", text, limits::FOOTER_TEXT)?;

        Ok(FooterPayload {
            text,
            icon_url: self.icon_url.as_deref(),
        })
    }

    /// Validates the footer and renders it as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the text is missing or too long.
    pub fn serialize(&self) -> Result<String, ValidationError> {
        self.payload().map(|p| wire::to_json(&p))
    }
}

/// Thumbnail of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thumbnail {
    url: Option<String>,
}

impl Thumbnail {
    /// Creates an empty thumbnail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the thumbnail URL (required).
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub(crate) fn payload(&self) -> Result<MediaPayload<'_>, ValidationError> {
        Ok(MediaPayload {
            url: require("url", self.url.as_deref())?,
        })
    }

    /// Validates the thumbnail and renders it as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] if no URL was set.
    pub fn serialize(&self) -> Result<String, ValidationError> {
        self.payload().map(|p| wire::to_json(&p))
    }
}

/// Large image of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    url: Option<String>,
}

impl Image {
    /// Creates an empty image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image URL (required).
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub(crate) fn payload(&self) -> Result<MediaPayload<'_>, ValidationError> {
        Ok(MediaPayload {
            url: require("url", self.url.as_deref())?,
        })
    }

    /// Validates the image and renders it as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] if no URL was set.
    pub fn serialize(&self) -> Result<String, ValidationError> {
        self.payload().map(|p| wire::to_json(&p))
    }
}

/// Author line of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    name: Option<String>,
    url: Option<String>,
    icon_url: Option<String>,
}

impl Author {
    /// Creates an empty author.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author name (required, at most 256 characters).
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the link behind the author name.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the author icon URL.
    pub fn icon(&mut self, icon_url: impl Into<String>) -> &mut Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    pub(crate) fn payload(&self) -> Result<AuthorPayload<'_>, ValidationError> {
        let name = require("name", self.name.as_deref())?;
        check_length("name", name, limits::AUTHOR_NAME)?;

        Ok(AuthorPayload {
            name,
            author_url: self.url.as_deref(),
            icon_url: self.icon_url.as_deref(),
        })
    }

    /// Validates the author and renders it as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the name is missing or too long.
    pub fn serialize(&self) -> Result<String, ValidationError> {
        self.payload().map(|p| wire::to_json(&p))
    }
}

/// A name/value pair shown inside an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    name: Option<String>,
    value: Option<String>,
    inline: bool,
}

impl Field {
    /// Creates an empty, non-inline field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field name (required, at most 256 characters).
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the field value (required, at most 1024 characters).
    pub fn value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Sets whether the field is laid out inline with its neighbours.
    pub const fn inline(&mut self, inline: bool) -> &mut Self {
        self.inline = inline;
        self
    }

    pub(crate) fn payload(&self) -> Result<FieldPayload<'_>, ValidationError> {
        let name = require("name", self.name.as_deref())?;
        let value = require("value", self.value.as_deref())?;
        check_length("name", name, limits::FIELD_NAME)?;
        check_length("value", value, limits::FIELD_VALUE)?;

        Ok(FieldPayload {
            name,
            value,
            inline: self.inline,
        })
    }

    /// Validates the field and renders it as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the name or value is missing or too long.
    pub fn serialize(&self) -> Result<String, ValidationError> {
        self.payload().map(|p| wire::to_json(&p))
    }
}
