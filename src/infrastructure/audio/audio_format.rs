/// Container formats the Whisper APIs accept, identified by their leading
/// bytes. The providers pick a decoder from the upload's file extension, so
/// the name sent with the audio has to match what the bytes actually are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Webm,
    Ogg,
    Mp3,
    M4a,
    Flac,
}

const EBML_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];

impl AudioFormat {
    /// Returns `None` when the bytes match no known container.
    pub fn detect(audio: &[u8]) -> Option<Self> {
        match audio {
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some(Self::Wav),
            [a, b, c, d, ..] if [*a, *b, *c, *d] == EBML_MAGIC => Some(Self::Webm),
            [b'O', b'g', b'g', b'S', ..] => Some(Self::Ogg),
            [b'f', b'L', b'a', b'C', ..] => Some(Self::Flac),
            [b'I', b'D', b'3', ..] => Some(Self::Mp3),
            [0xFF, second, ..] if second & 0xE0 == 0xE0 => Some(Self::Mp3),
            [_, _, _, _, b'f', b't', b'y', b'p', ..] => Some(Self::M4a),
            _ => None,
        }
    }

    /// Detected format, or WAV when the container is unrecognised.
    pub fn detect_or_wav(audio: &[u8]) -> Self {
        Self::detect(audio).unwrap_or(Self::Wav)
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Webm => "webm",
            Self::Ogg => "ogg",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Flac => "flac",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/mp4",
            Self::Flac => "audio/flac",
        }
    }

    pub fn file_name(self) -> String {
        format!("audio.{}", self.extension())
    }

    /// Multipart file part labelled with this format's name and MIME type.
    pub(super) fn file_part(
        self,
        audio: &[u8],
    ) -> Result<reqwest::multipart::Part, reqwest::Error> {
        reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name(self.file_name())
            .mime_str(self.mime_type())
    }
}
