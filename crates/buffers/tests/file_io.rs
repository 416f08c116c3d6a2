use std::fs;

use whimsy_buffers::{byte_stream, BufferError, ByteStream};

#[test]
fn write_then_read_file_preserves_exact_bytes() {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("dump.bin");

    let mut stream = byte_stream!["MThd", 0x00u8];
    stream.add_int_big_endian(6).add_midi_var_len(0x0fff_ffff);
    let written = stream.write_file(&path).expect("write must succeed");
    assert_eq!(written, stream.len());
    assert_eq!(fs::read(&path).expect("file must exist"), stream.as_slice());

    let mut loaded = ByteStream::from(vec![0xaa; 100]);
    loaded.seek_set(50).expect("seek must succeed");
    let read = loaded.read_file(&path).expect("read must succeed");
    assert_eq!(read, stream.len());
    assert_eq!(loaded, stream);
    assert_eq!(loaded.tell(), 0);

    assert_eq!(loaded.get_bytes(4).expect("header must be readable"), b"MThd");
    assert_eq!(loaded.get_variable::<u8>().expect("pad byte"), 0);
    assert_eq!(loaded.get_int_big_endian().expect("length"), 6);
    assert_eq!(loaded.get_midi_var_len().expect("varlen"), 0x0fff_ffff);
}

#[test]
fn write_empty_stream_creates_empty_file() {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("empty.bin");
    assert_eq!(ByteStream::new().write_file(&path).expect("write"), 0);
    assert_eq!(fs::metadata(&path).expect("metadata").len(), 0);
}

#[test]
fn write_truncates_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("short.bin");
    fs::write(&path, [1u8; 64]).expect("seed file");
    ByteStream::from(vec![2, 3]).write_file(&path).expect("write");
    assert_eq!(fs::read(&path).expect("read back"), [2, 3]);
}

#[test]
fn read_missing_file_reports_path_and_keeps_content() {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("missing.bin");

    let mut stream = ByteStream::from(vec![1, 2, 3]);
    match stream.read_file(&path) {
        Err(BufferError::CouldNotOpenFileForReading { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("expected CouldNotOpenFileForReading, got {other:?}"),
    }
    assert_eq!(stream.as_slice(), &[1, 2, 3]);
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("no/such/dir/out.bin");
    let err = ByteStream::from(vec![1]).write_file(&path).unwrap_err();
    assert!(matches!(err, BufferError::CouldNotOpenFileForWriting { .. }));
    assert!(err.to_string().contains("for writing"));
}
