//! Serialized image format (spec §6) and `set_backing` adoption.
//!
//! The backing allocation is itself the wire format: a header, immediately
//! followed by `capacity` slot records. All multi-byte fields use native
//! endianness, since the image is meant to be this process's in-memory
//! array as bytes, not a portable cross-architecture disk format (a
//! narrower goal than the teacher's own `core::Serialize`-based on-disk
//! encodings in `robt*.rs`/`type_i64.rs`, which fix big-endian for
//! portability across machines).
//!
//! `K`/`V` encode themselves through the [`Codec`] trait, grounded on the
//! teacher's own `core::Serialize` (`encode(&self, buf: &mut Vec<u8>)` /
//! `decode`), renamed here to avoid colliding with `serde::Serialize`,
//! which this crate also uses (for `IndexWidth` and diagnostics, not for
//! node slots).

use crate::header::{Header, IndexWidth};
use crate::idx::Idx;
use crate::node::{Color, Node};
use crate::tree::Tree;

/// Types that can be packed into and read back out of a slot record.
pub trait Codec: Sized {
    /// Append this value's encoding to `buf`.
    fn encode(&self, buf: &mut Vec<u8>);
    /// Read a value from the front of `buf`, returning it and the number
    /// of bytes consumed.
    fn decode(buf: &[u8]) -> crate::Result<(Self, usize)>;
}

macro_rules! impl_codec_for_uint {
    ($t:ty, $n:expr) => {
        impl Codec for $t {
            fn encode(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.to_ne_bytes());
            }
            fn decode(buf: &[u8]) -> crate::Result<(Self, usize)> {
                if buf.len() < $n {
                    return Err(crate::Error::AllocFail(format!(
                        "short buffer decoding {}: need {} bytes, have {}",
                        stringify!($t),
                        $n,
                        buf.len()
                    )));
                }
                let mut scratch = [0u8; $n];
                scratch.copy_from_slice(&buf[..$n]);
                Ok((<$t>::from_ne_bytes(scratch), $n))
            }
        }
    };
}

impl_codec_for_uint!(u32, 4);
impl_codec_for_uint!(u64, 8);
impl_codec_for_uint!(i32, 4);
impl_codec_for_uint!(i64, 8);

impl Codec for String {
    fn encode(&self, buf: &mut Vec<u8>) {
        (self.len() as u32).encode(buf);
        buf.extend_from_slice(self.as_bytes());
    }
    fn decode(buf: &[u8]) -> crate::Result<(Self, usize)> {
        let (len, used) = u32::decode(buf)?;
        let len = len as usize;
        let body = buf
            .get(used..used + len)
            .ok_or_else(|| crate::Error::AllocFail("short buffer decoding String".into()))?;
        let s = String::from_utf8(body.to_vec())
            .map_err(|e| crate::Error::AllocFail(e.to_string()))?;
        Ok((s, used + len))
    }
}

impl Codec for Vec<u8> {
    fn encode(&self, buf: &mut Vec<u8>) {
        (self.len() as u32).encode(buf);
        buf.extend_from_slice(self);
    }
    fn decode(buf: &[u8]) -> crate::Result<(Self, usize)> {
        let (len, used) = u32::decode(buf)?;
        let len = len as usize;
        let body = buf
            .get(used..used + len)
            .ok_or_else(|| crate::Error::AllocFail("short buffer decoding Vec<u8>".into()))?;
        Ok((body.to_vec(), used + len))
    }
}

// header layout: width tag (1 byte) + live_count (8) + capacity (8) +
// root_index (index_width-dependent byte count).
fn write_width_bytes(buf: &mut Vec<u8>, value: u64, width: IndexWidth) {
    match width {
        IndexWidth::W16 => buf.extend_from_slice(&(value as u16).to_ne_bytes()),
        IndexWidth::W32 => buf.extend_from_slice(&(value as u32).to_ne_bytes()),
        IndexWidth::W64 => buf.extend_from_slice(&value.to_ne_bytes()),
    }
}

fn read_width_bytes(buf: &[u8], width: IndexWidth) -> crate::Result<(u64, usize)> {
    let n = (width.bits() / 8) as usize;
    let body = buf
        .get(..n)
        .ok_or_else(|| crate::Error::AllocFail("short buffer decoding index field".into()))?;
    let value = match width {
        IndexWidth::W16 => {
            let mut s = [0u8; 2];
            s.copy_from_slice(body);
            u16::from_ne_bytes(s) as u64
        }
        IndexWidth::W32 => {
            let mut s = [0u8; 4];
            s.copy_from_slice(body);
            u32::from_ne_bytes(s) as u64
        }
        IndexWidth::W64 => {
            let mut s = [0u8; 8];
            s.copy_from_slice(body);
            u64::from_ne_bytes(s)
        }
    };
    Ok((value, n))
}

fn width_tag(width: IndexWidth) -> u8 {
    match width {
        IndexWidth::W16 => 0,
        IndexWidth::W32 => 1,
        IndexWidth::W64 => 2,
    }
}

fn width_from_tag(tag: u8) -> crate::Result<IndexWidth> {
    match tag {
        0 => Ok(IndexWidth::W16),
        1 => Ok(IndexWidth::W32),
        2 => Ok(IndexWidth::W64),
        other => Err(crate::Error::AllocFail(format!(
            "unrecognized index width tag {}",
            other
        ))),
    }
}

fn read_u64_field(buf: &[u8]) -> crate::Result<(u64, usize)> {
    let body = buf
        .get(..8)
        .ok_or_else(|| crate::Error::AllocFail("short buffer decoding u64 field".into()))?;
    Ok((u64::from_ne_bytes(body.try_into().unwrap()), 8))
}

fn read_color_tag(buf: &[u8]) -> crate::Result<(Color, usize)> {
    let body = buf
        .get(..4)
        .ok_or_else(|| crate::Error::AllocFail("short buffer decoding color tag".into()))?;
    let tag = u32::from_ne_bytes(body.try_into().unwrap());
    Ok((if tag == 0 { Color::Red } else { Color::Black }, 4))
}

fn read_live_flag(buf: &[u8]) -> crate::Result<(u8, usize)> {
    let byte = *buf
        .first()
        .ok_or_else(|| crate::Error::AllocFail("short buffer decoding live flag".into()))?;
    Ok((byte, 1))
}

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone + Codec,
    V: Clone + Codec,
{
    /// Encode this tree's full backing array (header + every slot, live or
    /// reserved) into a byte image per spec §6.
    pub fn to_bytes(&self) -> Vec<u8> {
        let width = Ix::WIDTH;
        let mut buf = Vec::new();
        buf.push(width_tag(width));
        buf.extend_from_slice(&self.header.live_count.to_ne_bytes());
        buf.extend_from_slice(&self.header.capacity.to_ne_bytes());
        write_width_bytes(&mut buf, self.header.root_index.to_u64(), width);

        for i in 0..self.header.capacity as usize {
            let slot = &self.slots[i];
            write_width_bytes(&mut buf, slot.parent.to_u64(), width);
            write_width_bytes(&mut buf, slot.left.to_u64(), width);
            write_width_bytes(&mut buf, slot.right.to_u64(), width);
            let color_tag: u32 = match slot.color {
                Color::Red => 0,
                Color::Black => 1,
            };
            buf.extend_from_slice(&color_tag.to_ne_bytes());
            match &slot.entry {
                Some((k, v)) => {
                    buf.push(1);
                    k.encode(&mut buf);
                    v.encode(&mut buf);
                }
                None => buf.push(0),
            }
        }
        buf
    }

    /// Decode a byte image produced by [`Tree::to_bytes`] for the *same*
    /// index width `Ix`. Fails with [`crate::Error::WidthMismatch`] if the
    /// image's width tag does not match `Ix::WIDTH`.
    pub fn from_bytes(image: &[u8]) -> crate::Result<Self> {
        let width = Ix::WIDTH;
        let tag = *image
            .first()
            .ok_or_else(|| crate::Error::AllocFail("empty image".into()))?;
        let found = width_from_tag(tag)?;
        if found != width {
            return Err(crate::Error::WidthMismatch {
                expected: width,
                found,
            });
        }
        let mut pos = 1;

        let (live_count, used) = read_u64_field(&image[pos..])?;
        pos += used;
        let (capacity, used) = read_u64_field(&image[pos..])?;
        pos += used;
        let (root_raw, used) = read_width_bytes(&image[pos..], width)?;
        pos += used;
        let root_index = Ix::from_u64(root_raw);

        let mut slots = Vec::with_capacity(capacity as usize);
        for _ in 0..capacity {
            let (parent_raw, used) = read_width_bytes(&image[pos..], width)?;
            pos += used;
            let (left_raw, used) = read_width_bytes(&image[pos..], width)?;
            pos += used;
            let (right_raw, used) = read_width_bytes(&image[pos..], width)?;
            pos += used;
            let (color, used) = read_color_tag(&image[pos..])?;
            pos += used;
            let (live_flag, used) = read_live_flag(&image[pos..])?;
            pos += used;
            let entry = if live_flag == 1 {
                let (k, used) = K::decode(&image[pos..])?;
                pos += used;
                let (v, used) = V::decode(&image[pos..])?;
                pos += used;
                Some((k, v))
            } else {
                None
            };
            slots.push(Node {
                parent: Ix::from_u64(parent_raw),
                left: Ix::from_u64(left_raw),
                right: Ix::from_u64(right_raw),
                color,
                entry,
            });
        }

        Ok(Tree {
            header: Header {
                live_count,
                root_index,
                capacity,
            },
            slots,
        })
    }

    /// Adopt `image` as this tree's backing storage in place, destroying
    /// the current one. Fails with [`crate::Error::WidthMismatch`] without
    /// modifying `self` if `image`'s index width differs from `Ix`; use
    /// [`Tree::transform`] for the cross-width path.
    pub fn set_backing(&mut self, image: &[u8]) -> crate::Result<()> {
        let adopted = Self::from_bytes(image)?;
        self.header = adopted.header;
        self.slots = adopted.slots;
        log::trace!(
            "rbarena: adopted external backing image, live_count {}",
            self.header.live_count
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;
