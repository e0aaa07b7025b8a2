// src/noyau/entree.rs
//
// Frontière d'entrée : conversion des types "rationnel-compatibles" vers
// les types exacts du noyau.
// - EnRationnel : BigRational, BigInt, i64, paire (num, den), chaînes
//   ("3/4", "1.25", "-7")
// - EnEntier    : BigInt, i64, chaînes ("12")
//
// Tout échec d'analyse est une ErreurRadical::EntreeInvalide, signalée
// ici avant d'atteindre la forme canonique.

use crate::noyau::erreur::ErreurRadical;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

/// Types convertibles en rationnel exact.
pub trait EnRationnel {
    fn en_rationnel(self) -> Result<BigRational, ErreurRadical>;
}

/// Types convertibles en entier exact (radicande).
pub trait EnEntier {
    fn en_entier(self) -> Result<BigInt, ErreurRadical>;
}

/* ------------------------ EnRationnel ------------------------ */

impl EnRationnel for BigRational {
    fn en_rationnel(self) -> Result<BigRational, ErreurRadical> {
        Ok(self)
    }
}

impl EnRationnel for BigInt {
    fn en_rationnel(self) -> Result<BigRational, ErreurRadical> {
        Ok(BigRational::from_integer(self))
    }
}

impl EnRationnel for i64 {
    fn en_rationnel(self) -> Result<BigRational, ErreurRadical> {
        Ok(BigRational::from_integer(BigInt::from(self)))
    }
}

impl EnRationnel for (i64, i64) {
    fn en_rationnel(self) -> Result<BigRational, ErreurRadical> {
        let (num, den) = self;
        if den == 0 {
            return Err(ErreurRadical::EntreeInvalide(
                "division par zéro dans une fraction".to_string(),
            ));
        }
        Ok(BigRational::new(BigInt::from(num), BigInt::from(den)))
    }
}

impl EnRationnel for &str {
    fn en_rationnel(self) -> Result<BigRational, ErreurRadical> {
        rationnel_depuis_chaine(self)
    }
}

impl EnRationnel for String {
    fn en_rationnel(self) -> Result<BigRational, ErreurRadical> {
        rationnel_depuis_chaine(&self)
    }
}

/* ------------------------ EnEntier ------------------------ */

impl EnEntier for BigInt {
    fn en_entier(self) -> Result<BigInt, ErreurRadical> {
        Ok(self)
    }
}

impl EnEntier for i64 {
    fn en_entier(self) -> Result<BigInt, ErreurRadical> {
        Ok(BigInt::from(self))
    }
}

impl EnEntier for &str {
    fn en_entier(self) -> Result<BigInt, ErreurRadical> {
        entier_depuis_chaine(self)
    }
}

impl EnEntier for String {
    fn en_entier(self) -> Result<BigInt, ErreurRadical> {
        entier_depuis_chaine(&self)
    }
}

/* ------------------------ analyse des chaînes ------------------------ */

/// Analyse "3/4", "1.25", "-7" en rationnel exact.
fn rationnel_depuis_chaine(s: &str) -> Result<BigRational, ErreurRadical> {
    let txt = s.trim();
    if txt.is_empty() {
        return Err(ErreurRadical::EntreeInvalide("chaîne vide".to_string()));
    }

    // Forme fraction : "num/den" (un seul '/').
    if let Some((gauche, droite)) = txt.split_once('/') {
        let num = entier_depuis_chaine(gauche)?;
        let den = entier_depuis_chaine(droite)?;
        if den.is_zero() {
            return Err(ErreurRadical::EntreeInvalide(
                "division par zéro dans une fraction".to_string(),
            ));
        }
        return Ok(BigRational::new(num, den));
    }

    // Forme décimale : "int.frac" => (int·10^k + frac) / 10^k.
    if let Some((entiere, decimales)) = txt.split_once('.') {
        if decimales.is_empty() || !decimales.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErreurRadical::EntreeInvalide(format!(
                "nombre décimal invalide : {txt}"
            )));
        }
        let partie_entiere = entier_depuis_chaine(if entiere.is_empty() { "0" } else { entiere })?;
        let partie_dec = BigInt::parse_bytes(decimales.as_bytes(), 10).ok_or_else(|| {
            ErreurRadical::EntreeInvalide(format!("nombre décimal invalide : {txt}"))
        })?;

        let echelle = BigInt::from(10).pow(decimales.len() as u32);
        let negatif = txt.starts_with('-');
        let numerateur = if negatif {
            &partie_entiere * &echelle - partie_dec
        } else {
            &partie_entiere * &echelle + partie_dec
        };
        return Ok(BigRational::new(numerateur, echelle));
    }

    // Forme entière.
    Ok(BigRational::from_integer(entier_depuis_chaine(txt)?))
}

/// Analyse un entier signé en base 10.
fn entier_depuis_chaine(s: &str) -> Result<BigInt, ErreurRadical> {
    let txt = s.trim();
    BigInt::parse_bytes(txt.as_bytes(), 10)
        .ok_or_else(|| ErreurRadical::EntreeInvalide(format!("entier invalide : {txt}")))
}
