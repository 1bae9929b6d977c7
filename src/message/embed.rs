//! Rich embed panels.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::color::{self, Rgb};

use super::error::{ValidationError, check_optional_length};
use super::limits;
use super::parts::{Author, Field, Footer, Image, Thumbnail};
use super::wire::{self, EmbedPayload};

/// A rich panel attached to a message.
///
/// An embed needs a description or at least one field by the time it is
/// serialized. Sub-objects (footer, thumbnail, image, author) are kept at most
/// once each; setting one again replaces the previous value.
///
/// # Example
///
/// ```
/// use webhook_builder::{Embed, color};
///
/// let mut embed = Embed::new();
/// embed
///     .title("Deploy finished")
///     .description("All services are healthy")
///     .color(color::GREEN)
///     .field(|f| {
///         f.name("Region").value("eu-west").inline(true);
///     })
///     .footer(|f| {
///         f.text("ci");
///     });
///
/// let json = embed.serialize().unwrap();
/// assert!(json.contains(r#""color":65280"#));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    color: Option<u32>,
    timestamp: Option<DateTime<Utc>>,
    footer: Option<Footer>,
    thumbnail: Option<Thumbnail>,
    image: Option<Image>,
    author: Option<Author>,
    fields: Vec<Field>,
}

impl Embed {
    /// Creates an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title (at most 256 characters).
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description (at most 4096 characters).
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the link behind the title.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the color from a packed integer, keeping only the low 24 bits.
    pub const fn color(&mut self, packed: u32) -> &mut Self {
        self.color = Some(packed & color::COLOR_MASK);
        self
    }

    /// Sets the color from raw channels. See [`color::encode`].
    pub const fn color_rgb(&mut self, r: i32, g: i32, b: i32) -> &mut Self {
        self.color = Some(color::encode(r, g, b));
        self
    }

    /// Sets the color from a typed color value.
    pub const fn color_of(&mut self, rgb: Rgb) -> &mut Self {
        self.color = Some(color::encode_rgb(rgb));
        self
    }

    /// Sets the timestamp shown next to the footer.
    ///
    /// Accepts any UTC date-time, including [`std::time::SystemTime`].
    pub fn timestamp(&mut self, timestamp: impl Into<DateTime<Utc>>) -> &mut Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Replaces the footer with one populated by `populate`.
    pub fn footer(&mut self, populate: impl FnOnce(&mut Footer)) -> &mut Self {
        let mut footer = Footer::new();
        populate(&mut footer);
        self.footer = Some(footer);
        self
    }

    /// Replaces the thumbnail with one populated by `populate`.
    pub fn thumbnail(&mut self, populate: impl FnOnce(&mut Thumbnail)) -> &mut Self {
        let mut thumbnail = Thumbnail::new();
        populate(&mut thumbnail);
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Replaces the image with one populated by `populate`.
    pub fn image(&mut self, populate: impl FnOnce(&mut Image)) -> &mut Self {
        let mut image = Image::new();
        populate(&mut image);
        self.image = Some(image);
        self
    }

    /// Replaces the author with one populated by `populate`.
    pub fn author(&mut self, populate: impl FnOnce(&mut Author)) -> &mut Self {
        let mut author = Author::new();
        populate(&mut author);
        self.author = Some(author);
        self
    }

    /// Appends a field populated by `populate`.
    pub fn field(&mut self, populate: impl FnOnce(&mut Field)) -> &mut Self {
        let mut field = Field::new();
        populate(&mut field);
        self.fields.push(field);
        self
    }

    /// Appends an already built field.
    pub fn add_field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn payload(&self) -> Result<EmbedPayload<'_>, ValidationError> {
        if self.description.is_none() && self.fields.is_empty() {
            return Err(ValidationError::MissingContent);
        }

        check_optional_length("title", self.title.as_deref(), limits::EMBED_TITLE)?;
        check_optional_length(
            "description",
            self.description.as_deref(),
            limits::EMBED_DESCRIPTION,
        )?;

        let footer = self.footer.as_ref().map(Footer::payload).transpose()?;
        let thumbnail = self.thumbnail.as_ref().map(Thumbnail::payload).transpose()?;
        let image = self.image.as_ref().map(Image::payload).transpose()?;
        let author = self.author.as_ref().map(Author::payload).transpose()?;

        let fields = if self.fields.is_empty() {
            None
        } else {
            Some(
                self.fields
                    .iter()
                    .map(Field::payload)
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        Ok(EmbedPayload {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            color: self.color,
            url: self.url.as_deref(),
            footer,
            thumbnail,
            image,
            author,
            fields,
            timestamp: self.timestamp.as_ref().map(format_timestamp),
        })
    }

    /// Validates the embed and its sub-objects and renders it as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingContent`] if there is neither a
    /// description nor a field, [`ValidationError::FieldTooLong`] for an
    /// oversized title or description, and any error from a sub-object
    /// unchanged.
    pub fn serialize(&self) -> Result<String, ValidationError> {
        self.payload().map(|p| wire::to_json(&p))
    }
}

/// ISO-8601 with milliseconds and an explicit `+00:00` offset.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, false)
}
