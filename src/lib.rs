//! Convert an RSA JSON Web Key ([RFC 7517][RFC7517]) into PEM-encoded key
//! blocks, built on top of the [RustCrypto][] ecosystem.
//!
//! A single JWK is read from standard input as JSON, and the equivalent keys
//! are written to standard output as two PEM blocks: the public key first,
//! as a Subject Public Key Info document, then the private key in PKCS#1
//! form. Any failure aborts the whole conversion; there is no recovery or
//! retry.
//!
//! The conversion logic itself is stream-agnostic: [`run`] takes the input
//! and output as parameters, and only the binary entry point binds them to
//! the process-wide handles.
//!
//! [RFC7517]: https://tools.ietf.org/html/rfc7517
//! [RustCrypto]: https://github.com/RustCrypto

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod base64data;
pub mod key;

pub use key::JsonWebKey;

use std::io;

/// Error converting a JWK read from the input stream.
///
/// Each variant wraps the failure with a short description of the step that
/// failed; the chain is printed as a single diagnostic line at the top
/// level.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input stream could not be read to completion.
    #[error("reading from stdin: {0}")]
    Read(#[source] io::Error),

    /// The input was not a well-formed JSON object with the expected JWK
    /// field shape.
    #[error("unmarshaling key: {0}")]
    Parse(#[from] serde_json::Error),

    /// The public key could not be derived from the JWK parameters.
    #[error("public key: {0}")]
    PublicKey(#[source] key::ConvertError),

    /// The private key could not be derived from the JWK parameters.
    #[error("private key: {0}")]
    PrivateKey(#[source] key::ConvertError),

    /// The public key PEM block could not be written.
    #[error("printing out public key: {0}")]
    WritePublicKey(#[source] io::Error),

    /// The private key PEM block could not be written.
    #[error("printing out private key: {0}")]
    WritePrivateKey(#[source] io::Error),
}

/// Read a single RSA JWK from `input` and write both PEM blocks to `output`.
///
/// The input is read to completion before any processing happens. The public
/// key block is written first; a failure while deriving or writing the
/// private key leaves the already-written public key bytes on the output.
pub fn run<R, W>(input: &mut R, output: &mut W) -> Result<(), Error>
where
    R: io::Read,
    W: io::Write,
{
    let mut raw = Vec::new();
    input.read_to_end(&mut raw).map_err(Error::Read)?;

    let jwk: JsonWebKey = serde_json::from_slice(&raw)?;

    let public = jwk.public_key_pem().map_err(Error::PublicKey)?;
    output
        .write_all(public.as_bytes())
        .map_err(Error::WritePublicKey)?;

    let private = jwk.private_key_pem().map_err(Error::PrivateKey)?;
    output
        .write_all(private.as_bytes())
        .map_err(Error::WritePrivateKey)?;
    output.flush().map_err(Error::WritePrivateKey)?;

    Ok(())
}
