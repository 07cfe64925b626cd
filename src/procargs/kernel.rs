//! `sysctl` queries for the kernel's copy of the process arguments (macOS).

use std::ptr;

use libc::{c_int, c_void};

use crate::error::LoginError;

/// Fetch the raw `kern.procargs2` blob for the current process.
///
/// Two steps: `kern.argmax` bounds the blob size, then the blob itself is
/// read into a buffer of that size and truncated to what the kernel wrote.
pub fn read_procargs() -> Result<Vec<u8>, LoginError> {
    let argmax = query_argmax()?;

    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(argmax)
        .map_err(|source| LoginError::Allocation {
            bytes: argmax,
            source,
        })?;
    buf.resize(argmax, 0);

    let pid = c_int::try_from(std::process::id())
        .map_err(|_| LoginError::malformed("pid out of range"))?;
    let mut mib = [libc::CTL_KERN, libc::KERN_PROCARGS2, pid];
    let mut len = buf.len();

    // SAFETY: `buf` is valid for `len` bytes and the kernel writes at most `len`.
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            buf.as_mut_ptr().cast::<c_void>(),
            &mut len,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(LoginError::KernelQuery {
            query: "kern.procargs2",
            source: std::io::Error::last_os_error(),
        });
    }

    buf.truncate(len);
    Ok(buf)
}

fn query_argmax() -> Result<usize, LoginError> {
    let mut mib = [libc::CTL_KERN, libc::KERN_ARGMAX];
    let mut argmax: c_int = 0;
    let mut size = std::mem::size_of::<c_int>();

    // SAFETY: `argmax` is a valid `c_int` and `size` matches it.
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            (&mut argmax as *mut c_int).cast::<c_void>(),
            &mut size,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(LoginError::KernelQuery {
            query: "kern.argmax",
            source: std::io::Error::last_os_error(),
        });
    }
    if size != std::mem::size_of::<c_int>() {
        return Err(LoginError::KernelQuery {
            query: "kern.argmax",
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unexpected result size {size}"),
            ),
        });
    }

    usize::try_from(argmax).map_err(|_| LoginError::KernelQuery {
        query: "kern.argmax",
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("negative argmax {argmax}"),
        ),
    })
}
