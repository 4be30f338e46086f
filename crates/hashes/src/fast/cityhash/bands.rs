//! Length bands and their kernel names.
//!
//! Each band is one specialized formula; `for_len` is the dispatch decision
//! made by [`hash32`](super::hash32) and [`hash64`](super::hash64), exposed so
//! callers can see which kernel a given length takes.

use core::fmt;

/// Inclusive upper bounds of the three bounded Hash32 bands.
const HASH32_BOUNDARIES: [usize; 3] = [4, 12, 24];

/// Inclusive upper bounds of the three bounded Hash64 bands.
const HASH64_BOUNDARIES: [usize; 3] = [16, 32, 64];

/// Size band selected by [`hash32`](super::hash32).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Hash32Band {
  Len0To4 = 0,
  Len5To12 = 1,
  Len13To24 = 2,
  /// 20-byte chunk loop.
  Long = 3,
}

impl Hash32Band {
  pub const ALL: [Self; 4] = [Self::Len0To4, Self::Len5To12, Self::Len13To24, Self::Long];

  #[inline]
  #[must_use]
  pub const fn for_len(len: usize) -> Self {
    let [xs_max, s_max, m_max] = HASH32_BOUNDARIES;
    if len <= xs_max {
      Self::Len0To4
    } else if len <= s_max {
      Self::Len5To12
    } else if len <= m_max {
      Self::Len13To24
    } else {
      Self::Long
    }
  }

  /// Largest length in the band, or `None` for the unbounded loop band.
  #[inline]
  #[must_use]
  pub const fn max_len(self) -> Option<usize> {
    let [xs_max, s_max, m_max] = HASH32_BOUNDARIES;
    match self {
      Self::Len0To4 => Some(xs_max),
      Self::Len5To12 => Some(s_max),
      Self::Len13To24 => Some(m_max),
      Self::Long => None,
    }
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Len0To4 => "hash32/len0to4",
      Self::Len5To12 => "hash32/len5to12",
      Self::Len13To24 => "hash32/len13to24",
      Self::Long => "hash32/long",
    }
  }
}

impl fmt::Display for Hash32Band {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Size band selected by [`hash64`](super::hash64).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Hash64Band {
  Len0To16 = 0,
  Len17To32 = 1,
  Len33To64 = 2,
  /// 64-byte block loop.
  Long = 3,
}

impl Hash64Band {
  pub const ALL: [Self; 4] = [Self::Len0To16, Self::Len17To32, Self::Len33To64, Self::Long];

  #[inline]
  #[must_use]
  pub const fn for_len(len: usize) -> Self {
    let [xs_max, s_max, m_max] = HASH64_BOUNDARIES;
    if len <= xs_max {
      Self::Len0To16
    } else if len <= s_max {
      Self::Len17To32
    } else if len <= m_max {
      Self::Len33To64
    } else {
      Self::Long
    }
  }

  /// Largest length in the band, or `None` for the unbounded loop band.
  #[inline]
  #[must_use]
  pub const fn max_len(self) -> Option<usize> {
    let [xs_max, s_max, m_max] = HASH64_BOUNDARIES;
    match self {
      Self::Len0To16 => Some(xs_max),
      Self::Len17To32 => Some(s_max),
      Self::Len33To64 => Some(m_max),
      Self::Long => None,
    }
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Len0To16 => "hash64/len0to16",
      Self::Len17To32 => "hash64/len17to32",
      Self::Len33To64 => "hash64/len33to64",
      Self::Long => "hash64/long",
    }
  }
}

impl fmt::Display for Hash64Band {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Kernel name [`hash32`](super::hash32) uses for an input of `len` bytes.
///
/// # Examples
///
/// ```
/// use hashes::fast::cityhash::kernel_name_for_len32;
///
/// assert_eq!(kernel_name_for_len32(12), "hash32/len5to12");
/// assert_eq!(kernel_name_for_len32(25), "hash32/long");
/// ```
#[inline]
#[must_use]
pub const fn kernel_name_for_len32(len: usize) -> &'static str {
  Hash32Band::for_len(len).as_str()
}

/// Kernel name [`hash64`](super::hash64) uses for an input of `len` bytes.
#[inline]
#[must_use]
pub const fn kernel_name_for_len64(len: usize) -> &'static str {
  Hash64Band::for_len(len).as_str()
}

#[cfg(test)]
mod tests {
  use std::string::ToString;

  use super::*;

  #[test]
  fn hash32_bands_partition_lengths() {
    let mut expected = 0usize;
    for len in 0..=1024 {
      let band = Hash32Band::for_len(len);
      // Bands are visited in order and never skipped.
      assert!(band as usize == expected || band as usize == expected + 1, "len={len}");
      expected = band as usize;
    }
    assert_eq!(expected, Hash32Band::Long as usize);

    for band in Hash32Band::ALL {
      if let Some(max) = band.max_len() {
        assert_eq!(Hash32Band::for_len(max), band);
        assert_eq!(Hash32Band::for_len(max + 1) as usize, band as usize + 1);
      }
    }
    assert_eq!(Hash32Band::for_len(0), Hash32Band::Len0To4);
    assert_eq!(Hash32Band::for_len(usize::MAX), Hash32Band::Long);
  }

  #[test]
  fn hash64_bands_partition_lengths() {
    let mut expected = 0usize;
    for len in 0..=1024 {
      let band = Hash64Band::for_len(len);
      assert!(band as usize == expected || band as usize == expected + 1, "len={len}");
      expected = band as usize;
    }
    assert_eq!(expected, Hash64Band::Long as usize);

    for band in Hash64Band::ALL {
      if let Some(max) = band.max_len() {
        assert_eq!(Hash64Band::for_len(max), band);
        assert_eq!(Hash64Band::for_len(max + 1) as usize, band as usize + 1);
      }
    }
    assert_eq!(Hash64Band::for_len(0), Hash64Band::Len0To16);
    assert_eq!(Hash64Band::for_len(usize::MAX), Hash64Band::Long);
  }

  #[test]
  fn names_match_display() {
    for band in Hash32Band::ALL {
      assert_eq!(band.to_string(), band.as_str());
    }
    for band in Hash64Band::ALL {
      assert_eq!(band.to_string(), band.as_str());
    }
    assert_eq!(kernel_name_for_len32(0), "hash32/len0to4");
    assert_eq!(kernel_name_for_len32(13), "hash32/len13to24");
    assert_eq!(kernel_name_for_len64(16), "hash64/len0to16");
    assert_eq!(kernel_name_for_len64(17), "hash64/len17to32");
    assert_eq!(kernel_name_for_len64(65), "hash64/long");
  }
}
