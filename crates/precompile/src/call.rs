//! Byte buffer calling convention used across a native library boundary.
//!
//! The caller owns both buffers and gets back how many bytes of each were written.
//! [`PREALLOCATE_FOR_RESULT_BYTES`](crate::bls12_381_const::PREALLOCATE_FOR_RESULT_BYTES) and
//! [`PREALLOCATE_FOR_ERROR_BYTES`](crate::bls12_381_const::PREALLOCATE_FOR_ERROR_BYTES) are large
//! enough for every operation of the family.
use crate::{PrecompileError, Precompiles};
use std::string::ToString;

/// Result of [`perform_operation`] and the number of bytes written into each caller buffer.
///
/// On failure `output_len` is zero and `error` is set, even if the error buffer was too small
/// to hold any of the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallOutcome {
    /// Bytes of the encoded result written into the output buffer.
    pub output_len: usize,
    /// Bytes of the UTF-8 error message written into the error buffer.
    pub error_len: usize,
    /// Failure reason, `None` on success.
    pub error: Option<PrecompileError>,
}

impl CallOutcome {
    /// Returns `true` if the operation succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs the operation identified by `selector` over `input`.
///
/// The result is written to the front of `output`, or the error message to the front of
/// `error`. Nothing past the reported length is touched. An error message longer than the
/// error buffer is cut at the last character boundary that fits.
pub fn perform_operation(
    selector: u8,
    input: &[u8],
    output: &mut [u8],
    error: &mut [u8],
) -> CallOutcome {
    let result = Precompiles::eip2537().run(selector, input).and_then(|out| {
        let dst = output
            .get_mut(..out.len())
            .ok_or(PrecompileError::OutputBufferTooSmall)?;
        dst.copy_from_slice(&out.bytes);
        Ok(out.len())
    });

    match result {
        Ok(output_len) => CallOutcome {
            output_len,
            error_len: 0,
            error: None,
        },
        Err(err) => {
            if err.is_input_error() {
                tracing::trace!(selector, %err, "input rejected");
            } else {
                tracing::debug!(selector, %err, "operation failed");
            }
            CallOutcome {
                output_len: 0,
                error_len: write_error(error, &err),
                error: Some(err),
            }
        }
    }
}

fn write_error(buf: &mut [u8], err: &PrecompileError) -> usize {
    let message = err.to_string();
    let mut len = message.len().min(buf.len());
    while !message.is_char_boundary(len) {
        len -= 1;
    }
    buf[..len].copy_from_slice(&message.as_bytes()[..len]);
    len
}
