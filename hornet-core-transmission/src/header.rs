pub const FRAME_HEADER_SIZE: usize = 4;

pub const DEFAULT_MAX_FRAME_SIZE: u32 = 150_000;

pub fn encode_frame_header(frame_size: u32) -> [u8; FRAME_HEADER_SIZE] {
    frame_size.to_be_bytes()
}

pub fn decode_frame_header(header: [u8; FRAME_HEADER_SIZE]) -> u32 {
    u32::from_be_bytes(header)
}
