use interavoice::infrastructure::audio::AudioFormat;

#[test]
fn given_media_recorder_webm_header_when_detecting_then_returns_webm() {
    let header: [u8; 8] = [0x1A, 0x45, 0xDF, 0xA3, 0x9F, 0x42, 0x86, 0x81];

    assert_eq!(AudioFormat::detect(&header), Some(AudioFormat::Webm));
}

#[test]
fn given_known_container_headers_when_detecting_then_returns_matching_format() {
    let cases: [(&[u8], AudioFormat); 6] = [
        (&b"RIFF\x24\x08\x00\x00WAVEfmt "[..], AudioFormat::Wav),
        (&b"OggS\x00\x02\x00\x00"[..], AudioFormat::Ogg),
        (&b"ID3\x04\x00\x00\x00\x00"[..], AudioFormat::Mp3),
        (&[0xFF_u8, 0xFB, 0x90, 0x64][..], AudioFormat::Mp3),
        (&b"\x00\x00\x00\x1cftypM4A "[..], AudioFormat::M4a),
        (&b"fLaC\x00\x00\x00\x22"[..], AudioFormat::Flac),
    ];

    for (bytes, expected) in cases {
        assert_eq!(AudioFormat::detect(bytes), Some(expected), "{bytes:?}");
    }
}

#[test]
fn given_riff_without_wave_tag_when_detecting_then_returns_none() {
    assert_eq!(AudioFormat::detect(b"RIFF\x24\x08\x00\x00AVI LIST"), None);
}

#[test]
fn given_short_or_unknown_bytes_when_detecting_then_falls_back_to_wav() {
    assert_eq!(AudioFormat::detect(b""), None);
    assert_eq!(AudioFormat::detect(b"\x1A\x45"), None);
    assert_eq!(AudioFormat::detect_or_wav(b"plain text"), AudioFormat::Wav);
}

#[test]
fn given_format_when_naming_upload_then_extension_and_mime_agree() {
    assert_eq!(AudioFormat::Webm.file_name(), "audio.webm");
    assert_eq!(AudioFormat::Webm.mime_type(), "audio/webm");
    assert_eq!(AudioFormat::Mp3.file_name(), "audio.mp3");
    assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
    assert_eq!(AudioFormat::M4a.mime_type(), "audio/mp4");
}
