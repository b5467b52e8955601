use bytes::Bytes;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Raw PCM as delivered by Bazarr: signed 16-bit little-endian, 16 kHz, mono.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAudio(Bytes);

impl RawAudio {
    pub const SAMPLE_RATE_HZ: u32 = 16_000;
    pub const CHANNELS: u16 = 1;
    pub const SAMPLE_FORMAT: &'static str = "s16le";

    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Cheap handle on the same buffer, always positioned at its start.
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Playback length implied by the fixed input format.
    pub fn duration_secs(&self) -> f64 {
        let bytes_per_second = Self::SAMPLE_RATE_HZ as f64 * 2.0 * Self::CHANNELS as f64;
        self.0.len() as f64 / bytes_per_second
    }
}

/// Compressed upload payload produced by the transcoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    data: Bytes,
    file_name: &'static str,
    mime_type: &'static str,
}

impl EncodedAudio {
    pub fn ogg_opus(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            file_name: "file.ogg",
            mime_type: "audio/ogg",
        }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size_mib(&self) -> f64 {
        bytes_to_mib(self.data.len())
    }
}

pub fn bytes_to_mib(bytes: usize) -> f64 {
    bytes as f64 / BYTES_PER_MIB
}
