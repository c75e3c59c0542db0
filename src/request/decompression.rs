//! Response decompression methods

use bitflags::bitflags;

bitflags! {
    /// Content codings the client should negotiate and decode automatically.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DecompressionMethods: u8 {
        const GZIP = 1 << 0;
        const DEFLATE = 1 << 1;
        const BROTLI = 1 << 2;
        const ALL = Self::GZIP.bits() | Self::DEFLATE.bits() | Self::BROTLI.bits();
    }
}

impl DecompressionMethods {
    pub const NONE: Self = Self::empty();

    /// Parse a content-coding token such as `gzip` or `br`
    pub fn from_coding(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "gzip" => Some(Self::GZIP),
            "deflate" => Some(Self::DEFLATE),
            "br" | "brotli" => Some(Self::BROTLI),
            "all" => Some(Self::ALL),
            "none" => Some(Self::NONE),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DecompressionMethods;

    #[test]
    fn from_coding_accepts_aliases() {
        assert_eq!(
            DecompressionMethods::from_coding("BR"),
            Some(DecompressionMethods::BROTLI)
        );
        assert_eq!(
            DecompressionMethods::from_coding("brotli"),
            Some(DecompressionMethods::BROTLI)
        );
        assert_eq!(DecompressionMethods::from_coding("zstd"), None);
    }

    #[test]
    fn all_covers_every_coding() {
        assert!(DecompressionMethods::ALL.contains(DecompressionMethods::GZIP));
        assert!(DecompressionMethods::ALL.contains(DecompressionMethods::DEFLATE));
        assert!(DecompressionMethods::ALL.contains(DecompressionMethods::BROTLI));
        assert!(DecompressionMethods::NONE.is_empty());
    }
}
