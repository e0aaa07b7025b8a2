// src/noyau/lecture.rs
//
// Lecture décimale exacte (ΣLocal) : rendu de a + b·√c à n chiffres
// par arithmétique entière scalée (×10^n). Aucun flottant dans ce
// chemin. Les derniers chiffres sont tronqués (vers zéro), pas
// arrondis ; des chiffres de garde amortissent les troncatures
// intermédiaires.

use crate::noyau::nombre::NombreRadical;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/* ------------------------ décimal (scalé -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// r -> entier “scalé” = trunc(r * 10^digits)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/* ------------------------ √ scalée (Newton) ------------------------ */

/// sqrt(r) en entier scalé : floor( sqrt(r) * 10^digits ), r = n/d >= 0.
fn rational_sqrt_scaled(r: &BigRational, digits: usize) -> BigInt {
    let n = r.numer().clone();
    let d = r.denom().clone();

    if n.is_zero() {
        return BigInt::zero();
    }

    // On veut y ≈ sqrt(n/d) * 10^digits
    // => y^2 ≈ (n * 10^(2*digits)) / d
    let scale2 = pow10(2 * digits);
    let target = n * scale2;

    // point de départ
    let mut y = pow10(digits);
    if y.is_zero() {
        y = BigInt::one();
    }

    // Newton sur y pour sqrt(target/d)
    loop {
        let denom = &d * &y;
        if denom.is_zero() {
            break;
        }

        let q = &target / denom;
        let y_next = (&y + q) >> 1;

        if y_next == y || y_next == (&y - 1u32) {
            // ajustement final (floor)
            let mut y_adj = y_next;

            while (&y_adj + 1u32) * (&y_adj + 1u32) * &d <= target {
                y_adj += 1u32;
            }
            while &y_adj * &y_adj * &d > target {
                y_adj -= 1u32;
            }
            return y_adj;
        }

        y = y_next;
    }

    y
}

/* ------------------------ ΣLocal sur le triplet ------------------------ */

// Chiffres de garde : les deux termes sont tronqués indépendamment,
// la garde absorbe l'erreur avant le retrait final.
const CHIFFRES_DE_GARDE: usize = 10;

fn valeur_scalee(n: &NombreRadical, digits: usize) -> BigInt {
    let fin = digits + CHIFFRES_DE_GARDE;

    let mut total = rational_scaled(n.ajout(), fin);

    if !n.facteur().is_zero() {
        // b·√c = signe(b) · √(b²·c), avec b²·c rationnel.
        let b = n.facteur();
        let carre = b * b * BigRational::from_integer(n.radicande().clone());
        let racine = rational_sqrt_scaled(&carre, fin);

        if b.is_negative() {
            total -= racine;
        } else {
            total += racine;
        }
    }

    total / pow10(CHIFFRES_DE_GARDE)
}

/// Rendu décimal tronqué de la valeur à `digits` chiffres après la
/// virgule. Tout le chemin est entier : le résultat est exact jusqu'à
/// la troncature du dernier chiffre.
pub fn lecture_decimale(n: &NombreRadical, digits: usize) -> String {
    scaled_to_decimal(valeur_scalee(n, digits), digits)
}
