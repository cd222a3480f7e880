//! BER tag/length/value decoding (§4.2): bytes in, a [`RawTree`] out.

use bytes::Bytes;

use crate::arena::{Arena, NodeId};
use crate::ber_err;
use crate::errors::{BerError, ErrorCode};
use crate::identifier::{NodeKind, TagClass};
use crate::raw::{RawNode, RawTree};

/// The decoder's only configurable knob: how deeply nested a Raw Tree may be
/// before the parse fails with [`ErrorCode::NestingTooDeep`].
#[derive(Debug, Clone, Copy)]
pub struct DecoderOptions {
    pub max_depth: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions { max_depth: 256 }
    }
}

/// Parses `buf` into a [`RawTree`] using the default [`DecoderOptions`].
pub fn parse_ber(buf: &[u8]) -> Result<RawTree, BerError> {
    parse_ber_with_options(buf, DecoderOptions::default())
}

/// Parses `buf` into a [`RawTree`], honouring a caller-supplied nesting limit.
pub fn parse_ber_with_options(buf: &[u8], options: DecoderOptions) -> Result<RawTree, BerError> {
    let data = Bytes::copy_from_slice(buf);
    let n = data.len();
    let mut arena: Arena<RawNode> = Arena::new();
    let mut pos = 0usize;
    let children = parse_tlv_sequence(&data, &mut arena, &mut pos, n, false, 1, &options)?;

    let root = arena.alloc(RawNode::new(0, TagClass::Universal, NodeKind::Constructed, data.clone(), children));
    Ok(RawTree::new(arena, root))
}

/// Parses zero or more TLVs starting at `*pos`, stopping either at `limit`
/// (definite form) or at an end-of-contents marker (`indefinite = true`).
fn parse_tlv_sequence(
    data: &Bytes,
    arena: &mut Arena<RawNode>,
    pos: &mut usize,
    limit: usize,
    indefinite: bool,
    depth: usize,
    options: &DecoderOptions,
) -> Result<Vec<NodeId>, BerError> {
    let mut children = Vec::new();
    loop {
        if indefinite {
            if *pos + 2 <= limit && data[*pos] == 0x00 && data[*pos + 1] == 0x00 {
                *pos += 2;
                break;
            }
            if *pos >= limit {
                return Err(ber_err!(ErrorCode::MissingEOC, Some(*pos), "indefinite-length group never closed"));
            }
        } else if *pos >= limit {
            break;
        }
        children.push(parse_tlv(data, arena, pos, limit, depth, options)?);
    }
    Ok(children)
}

fn parse_tlv(
    data: &Bytes,
    arena: &mut Arena<RawNode>,
    pos: &mut usize,
    limit: usize,
    depth: usize,
    options: &DecoderOptions,
) -> Result<NodeId, BerError> {
    if depth > options.max_depth {
        return Err(ber_err!(ErrorCode::NestingTooDeep, Some(*pos), "nesting exceeds max_depth {}", options.max_depth));
    }

    let (class, kind, tag, consumed) = read_identifier(data, *pos, limit)?;
    *pos += consumed;

    let length = read_length(data, pos, limit)?;

    match (kind, length) {
        (NodeKind::Primitive, Length::Indefinite) => {
            Err(ber_err!(ErrorCode::IndefiniteOnPrimitive, Some(*pos), "primitive node with indefinite length"))
        }
        (NodeKind::Primitive, Length::Definite(len)) => {
            let len = len as usize;
            let end = pos.checked_add(len).ok_or_else(|| {
                ber_err!(ErrorCode::LengthOverflow, Some(*pos), "declared length {} overflows", len)
            })?;
            if end > limit {
                return Err(ber_err!(
                    ErrorCode::LengthOverflow,
                    Some(*pos),
                    "declared length {} extends past enclosing container",
                    len
                ));
            }
            let value = data.slice(*pos..end);
            *pos = end;
            Ok(arena.alloc(RawNode::new(tag, class, kind, value, Vec::new())))
        }
        (NodeKind::Constructed, Length::Definite(len)) => {
            let len = len as usize;
            let content_start = *pos;
            let content_end = content_start.checked_add(len).ok_or_else(|| {
                ber_err!(ErrorCode::LengthOverflow, Some(*pos), "declared length {} overflows", len)
            })?;
            if content_end > limit {
                return Err(ber_err!(
                    ErrorCode::LengthOverflow,
                    Some(*pos),
                    "declared length {} extends past enclosing container",
                    len
                ));
            }
            let children = parse_tlv_sequence(data, arena, pos, content_end, false, depth + 1, options)?;
            if *pos != content_end {
                return Err(ber_err!(
                    ErrorCode::LengthOverflow,
                    Some(*pos),
                    "children did not exactly fill declared length {}",
                    len
                ));
            }
            let value = data.slice(content_start..content_end);
            Ok(arena.alloc(RawNode::new(tag, class, kind, value, children)))
        }
        (NodeKind::Constructed, Length::Indefinite) => {
            let content_start = *pos;
            let children = parse_tlv_sequence(data, arena, pos, limit, true, depth + 1, options)?;
            // `*pos` now sits just past the consumed EOC marker.
            let value = data.slice(content_start..*pos - 2);
            Ok(arena.alloc(RawNode::new(tag, class, kind, value, children)))
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Length {
    Definite(u64),
    Indefinite,
}

/// Reads one identifier octet (and, for high-tag-number form, its
/// continuation octets) starting at `data[pos]`. Returns the decoded
/// `(class, kind, tag, bytes_consumed)`.
fn read_identifier(data: &Bytes, pos: usize, limit: usize) -> Result<(TagClass, NodeKind, u64, usize), BerError> {
    if pos >= limit {
        return Err(ber_err!(ErrorCode::UnexpectedEnd, Some(pos), "input exhausted reading identifier octet"));
    }
    let first = data[pos];
    let class = TagClass::from_top_byte(first);
    let kind = if first & 0x20 != 0 { NodeKind::Constructed } else { NodeKind::Primitive };
    let low5 = first & 0x1F;

    if low5 != 0x1F {
        return Ok((class, kind, low5 as u64, 1));
    }

    // High-tag-number form: base-128 continuation, high bit = "more octets follow".
    let mut tag: u64 = 0;
    let mut consumed = 1usize;
    loop {
        let idx = pos + consumed;
        if idx >= limit {
            return Err(ber_err!(ErrorCode::TagTooLong, Some(pos), "high-tag-number form did not terminate"));
        }
        let byte = data[idx];
        consumed += 1;
        tag = tag
            .checked_shl(7)
            .and_then(|t| t.checked_add(u64::from(byte & 0x7F)))
            .ok_or_else(|| ber_err!(ErrorCode::TagTooLong, Some(pos), "tag number overflows u64"))?;
        if byte & 0x80 == 0 {
            break;
        }
    }
    Ok((class, kind, tag, consumed))
}

/// Reads the length octet(s) starting at `*pos`, advancing `*pos` past them.
fn read_length(data: &Bytes, pos: &mut usize, limit: usize) -> Result<Length, BerError> {
    if *pos >= limit {
        return Err(ber_err!(ErrorCode::UnexpectedEnd, Some(*pos), "input exhausted reading length octet"));
    }
    let first = data[*pos];
    *pos += 1;

    if first == 0x80 {
        return Ok(Length::Indefinite);
    }

    if first & 0x80 == 0 {
        return Ok(Length::Definite(u64::from(first)));
    }

    let n = (first & 0x7F) as usize;
    if n > 4 {
        return Err(ber_err!(ErrorCode::LengthTooLong, Some(*pos - 1), "long-form length uses {} octets (max 4)", n));
    }
    if *pos + n > limit {
        return Err(ber_err!(ErrorCode::UnexpectedEnd, Some(*pos), "input exhausted reading long-form length"));
    }
    let mut len: u64 = 0;
    for i in 0..n {
        len = (len << 8) | u64::from(data[*pos + i]);
    }
    *pos += n;
    Ok(Length::Definite(len))
}
