use rayon::prelude::*;
use std::io::{Read, Write};

use crate::error::HalfrotError;
use crate::keys::KeyPair;
use crate::{decode, encode};

// Safe to parallelize: every per-character transform is an independent pure
// computation with no dependency on neighboring characters or prior calls.

pub fn encode_batch<R, W>(batch: &mut [(R, W)], keys: &KeyPair) -> Result<(), HalfrotError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encode(src, dst, keys))
}

pub fn decode_batch<R, W>(batch: &mut [(R, W)], keys: &KeyPair) -> Result<(), HalfrotError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decode(src, dst, keys))
}
