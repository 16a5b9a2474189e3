use std::collections::BTreeMap;

/// An unsigned EXIF `RATIONAL`: two 32-bit integers forming a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// A whole number, `n/1`.
    pub const fn whole(numerator: u32) -> Self {
        Self::new(numerator, 1)
    }

    /// `None` for a zero denominator.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| f64::from(self.numerator) / f64::from(self.denominator))
    }
}

/// The image file directory a tag lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ifd {
    Zeroth,
    Exif,
    Gps,
}

/// The storage type a tag slot expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Ascii,
    Rational,
    Short,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ASCII",
            Self::Rational => "RATIONAL",
            Self::Short => "SHORT",
        }
    }
}

/// Every tag slot this crate writes, with its TIFF/EXIF numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagId {
    // 0th IFD
    ImageDescription,
    Make,
    Model,
    Software,
    DateTime,
    // Exif IFD
    ExposureTime,
    FNumber,
    Iso,
    DateTimeOriginal,
    DateTimeDigitized,
    OffsetTime,
    OffsetTimeOriginal,
    OffsetTimeDigitized,
    FocalLength,
    SubSecTime,
    SubSecTimeOriginal,
    SubSecTimeDigitized,
    ColorSpace,
    // GPS IFD
    GpsLatitudeRef,
    GpsLatitude,
    GpsLongitudeRef,
    GpsLongitude,
    GpsTimeStamp,
    GpsDateStamp,
}

impl TagId {
    pub const fn ifd(self) -> Ifd {
        match self {
            Self::ImageDescription | Self::Make | Self::Model | Self::Software | Self::DateTime => {
                Ifd::Zeroth
            }
            Self::GpsLatitudeRef
            | Self::GpsLatitude
            | Self::GpsLongitudeRef
            | Self::GpsLongitude
            | Self::GpsTimeStamp
            | Self::GpsDateStamp => Ifd::Gps,
            _ => Ifd::Exif,
        }
    }

    /// Tag number within its IFD.
    pub const fn code(self) -> u16 {
        match self {
            Self::ImageDescription => 0x010e,
            Self::Make => 0x010f,
            Self::Model => 0x0110,
            Self::Software => 0x0131,
            Self::DateTime => 0x0132,
            Self::ExposureTime => 0x829a,
            Self::FNumber => 0x829d,
            Self::Iso => 0x8827,
            Self::DateTimeOriginal => 0x9003,
            Self::DateTimeDigitized => 0x9004,
            Self::OffsetTime => 0x9010,
            Self::OffsetTimeOriginal => 0x9011,
            Self::OffsetTimeDigitized => 0x9012,
            Self::FocalLength => 0x920a,
            Self::SubSecTime => 0x9290,
            Self::SubSecTimeOriginal => 0x9291,
            Self::SubSecTimeDigitized => 0x9292,
            Self::ColorSpace => 0xa001,
            Self::GpsLatitudeRef => 0x0001,
            Self::GpsLatitude => 0x0002,
            Self::GpsLongitudeRef => 0x0003,
            Self::GpsLongitude => 0x0004,
            Self::GpsTimeStamp => 0x0007,
            Self::GpsDateStamp => 0x001d,
        }
    }

    pub const fn kind(self) -> ValueKind {
        match self {
            Self::ExposureTime
            | Self::FNumber
            | Self::FocalLength
            | Self::GpsLatitude
            | Self::GpsLongitude
            | Self::GpsTimeStamp => ValueKind::Rational,
            Self::Iso | Self::ColorSpace => ValueKind::Short,
            _ => ValueKind::Ascii,
        }
    }

    /// Fixed value count, `None` when the count is free (ASCII).
    pub const fn count(self) -> Option<usize> {
        match self {
            Self::GpsLatitude | Self::GpsLongitude | Self::GpsTimeStamp => Some(3),
            Self::ExposureTime | Self::FNumber | Self::FocalLength | Self::ColorSpace => Some(1),
            Self::GpsLatitudeRef | Self::GpsLongitudeRef => Some(1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Ascii(String),
    Rational(Vec<Rational>),
    Short(Vec<u16>),
}

impl TagValue {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Ascii(_) => ValueKind::Ascii,
            Self::Rational(_) => ValueKind::Rational,
            Self::Short(_) => ValueKind::Short,
        }
    }

    /// Number of stored values; for ASCII this is the character count.
    pub fn len(&self) -> usize {
        match self {
            Self::Ascii(s) => s.chars().count(),
            Self::Rational(v) => v.len(),
            Self::Short(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All tag blocks of one EXIF structure, keyed by slot.
///
/// Tags are kept in one ordered map; [`ExifPayload::block`] filters a single IFD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExifPayload {
    tags: BTreeMap<TagId, TagValue>,
}

impl ExifPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a tag, returning the previous value.
    pub fn insert(&mut self, tag: TagId, value: TagValue) -> Option<TagValue> {
        self.tags.insert(tag, value)
    }

    pub fn get(&self, tag: TagId) -> Option<&TagValue> {
        self.tags.get(&tag)
    }

    pub fn contains(&self, tag: TagId) -> bool {
        self.tags.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagId, &TagValue)> {
        self.tags.iter().map(|(tag, value)| (*tag, value))
    }

    pub fn block(&self, ifd: Ifd) -> impl Iterator<Item = (TagId, &TagValue)> {
        self.iter().filter(move |(tag, _)| tag.ifd() == ifd)
    }
}
