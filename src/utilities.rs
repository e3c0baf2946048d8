//! Word and byte splitting for packed message parameters.

pub fn signed_lo_word(dword: i32) -> i16 {
  dword as i16
}

pub fn lo_word(dword: u32) -> u16 {
  dword as u16
}

pub fn signed_hi_word(dword: i32) -> i16 {
  (dword >> 16) as i16
}

pub fn hi_word(dword: u32) -> u16 {
  (dword >> 16) as u16
}

pub fn lo_byte(word: u16) -> u8 {
  word as u8
}

pub fn hi_byte(word: u16) -> u8 {
  (word >> 8) as u8
}

/// Packs two words into an `LPARAM`-sized value, `hi` in bits 16..32.
pub fn make_long(hi: u16, lo: u16) -> isize {
  (((hi as u32) << 16) | lo as u32) as i32 as isize
}
