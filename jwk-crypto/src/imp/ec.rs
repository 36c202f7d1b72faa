use p256::elliptic_curve::{
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytesSize, SecretKey,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::{EcKeyMaterial, EllipticCurve, KeyGenerationError};

pub fn generate<R: CryptoRng + RngCore>(
    rng: &mut R,
    curve: EllipticCurve,
) -> Result<EcKeyMaterial, KeyGenerationError> {
    let (x, y, d) = match curve {
        EllipticCurve::P256 => generate_on_curve::<p256::NistP256, _>(rng)?,
        EllipticCurve::P384 => generate_on_curve::<p384::NistP384, _>(rng)?,
        EllipticCurve::P521 => generate_on_curve::<p521::NistP521, _>(rng)?,
    };

    Ok(EcKeyMaterial { curve, x, y, d })
}

fn generate_on_curve<C, R>(
    rng: &mut R,
) -> Result<(Vec<u8>, Vec<u8>, Zeroizing<Vec<u8>>), KeyGenerationError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
    R: CryptoRng + RngCore,
{
    let secret_key = SecretKey::<C>::random(rng);
    let encoded_point = secret_key.public_key().to_encoded_point(false);

    let x = encoded_point
        .x()
        .ok_or(KeyGenerationError::CouldNotGenerate("X is missing".to_string()))?;
    let y = encoded_point
        .y()
        .ok_or(KeyGenerationError::CouldNotGenerate("Y is missing".to_string()))?;
    let d = Zeroizing::new(secret_key.to_bytes().to_vec());

    Ok((x.to_vec(), y.to_vec(), d))
}
