//! Closed enumerations for button appearance and behaviour.
//!
//! Each type carries an explicit allow-list of its wire spellings. Parsing is
//! strict membership; nothing outside the list is ever stored.

use std::fmt;

use crate::payload::error::FieldError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Wire spellings accepted by [`Self::parse`].
            pub const ALLOWED: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire spelling.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            /// Parses a wire spelling for the named field.
            ///
            /// # Errors
            ///
            /// Returns [`FieldError::NotAllowed`] for any value outside
            /// [`Self::ALLOWED`].
            pub fn parse(field: &'static str, value: &str) -> Result<Self, FieldError> {
                match value {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err(FieldError::NotAllowed {
                        field,
                        value: value.to_owned(),
                        allowed: Self::ALLOWED,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Kind of media drawn behind a button.
    BgMediaType {
        /// JPEG or PNG still image.
        Picture => "picture",
        /// Animated GIF.
        Gif => "gif",
    }
}

wire_enum! {
    /// Vertical alignment of button text.
    TextVAlign {
        /// Top edge.
        Top => "top",
        /// Centre.
        Middle => "middle",
        /// Bottom edge.
        Bottom => "bottom",
    }
}

wire_enum! {
    /// Horizontal alignment of button text.
    TextHAlign {
        /// Left edge.
        Left => "left",
        /// Centre.
        Center => "center",
        /// Right edge.
        Right => "right",
    }
}

wire_enum! {
    /// Button text size.
    TextSize {
        /// Small text.
        Small => "small",
        /// Regular text.
        Regular => "regular",
        /// Large text.
        Large => "large",
    }
}

wire_enum! {
    /// Where an `open-url` button opens its link.
    OpenUrlType {
        /// In the messenger's built-in browser.
        Internal => "internal",
        /// In the device's default browser.
        External => "external",
    }
}

wire_enum! {
    /// How an `open-url` button presents media links.
    OpenUrlMediaType {
        /// Treat the link as a web page.
        NotMedia => "not-media",
        /// Open the link as a picture.
        Picture => "picture",
        /// Open the link as a video.
        Video => "video",
        /// Open the link as an animated GIF.
        Gif => "gif",
    }
}

/// What pressing a button does.
///
/// Flows authored for older integrations use localised spellings; those are
/// accepted as aliases and normalised to the canonical value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Send the action body back to the bot.
    #[default]
    Reply,
    /// Open the action body as a URL and send it back to the bot.
    OpenUrl,
    /// Do nothing.
    None,
}

impl ActionType {
    /// Every spelling accepted by [`Self::parse`], canonical ones first.
    pub const ALLOWED: &'static [&'static str] = &[
        "reply",
        "open-url",
        "none",
        "ОтправитьДанные",
        "ОткрытьСсылку",
        "НичегоНеДелать",
    ];

    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reply => "reply",
            Self::OpenUrl => "open-url",
            Self::None => "none",
        }
    }

    /// Parses a canonical or legacy spelling for the named field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NotAllowed`] for any value outside
    /// [`Self::ALLOWED`].
    pub fn parse(field: &'static str, value: &str) -> Result<Self, FieldError> {
        match value {
            "reply" | "ОтправитьДанные" => Ok(Self::Reply),
            "open-url" | "ОткрытьСсылку" => Ok(Self::OpenUrl),
            "none" | "НичегоНеДелать" => Ok(Self::None),
            _ => Err(FieldError::NotAllowed {
                field,
                value: value.to_owned(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
