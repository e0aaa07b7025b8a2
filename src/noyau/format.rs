// src/noyau/format.rs
//
// Affichage des valeurs a + b·√c.
// - format_rationnel : n, ou n/d si le dénominateur n'est pas 1
// - terme radical : p√c/q, avec élision du coefficient ±1 (√2, -√2/2, 3√2/2)
// - format_joli : élision de l'ajout nul et signe porté par le séparateur
//
// Ne lit que les trois champs canoniques, jamais la vue flottante.

use crate::noyau::nombre::NombreRadical;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;

/* ------------------------ helpers rationnels ------------------------ */

pub fn format_rationnel(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

fn format_sqrt_de_l_entier(n: &BigInt) -> String {
    format!("√{n}")
}

/// (p/q)·√c -> p√c/q ; √c/q si p=1 ; -√c/q si p=-1.
fn format_terme_radical(r: &BigRational, c: &BigInt) -> String {
    let p = r.numer();
    let q = r.denom();

    if p.is_zero() {
        return "0".to_string();
    }

    if p == &BigInt::one() {
        if q.is_one() {
            return format_sqrt_de_l_entier(c);
        }
        return format!("{}/{}", format_sqrt_de_l_entier(c), q);
    }

    if p == &BigInt::from(-1) {
        if q.is_one() {
            return format!("-{}", format_sqrt_de_l_entier(c));
        }
        return format!("-{}/{}", format_sqrt_de_l_entier(c), q);
    }

    if q.is_one() {
        return format!("{p}{}", format_sqrt_de_l_entier(c));
    }
    format!("{p}{}/{}", format_sqrt_de_l_entier(c), q)
}

/* ------------------------ forme de publication ------------------------ */

/// a + b√c “joli” : ajout nul omis, signe du facteur porté par le
/// séparateur, coefficient ±1 élidé.
pub fn format_radical(n: &NombreRadical) -> String {
    if n.est_rationnel() {
        return format_rationnel(n.ajout());
    }

    if n.ajout().is_zero() {
        return format_terme_radical(n.facteur(), n.radicande());
    }

    let terme = format_terme_radical(&n.facteur().abs(), n.radicande());
    if n.facteur().is_negative() {
        format!("{} - {terme}", format_rationnel(n.ajout()))
    } else {
        format!("{} + {terme}", format_rationnel(n.ajout()))
    }
}

impl NombreRadical {
    /// Forme de publication (élisions). `Display` garde la forme brute.
    pub fn format_joli(&self) -> String {
        format_radical(self)
    }
}

impl fmt::Display for NombreRadical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}·√{}",
            format_rationnel(self.ajout()),
            format_rationnel(self.facteur()),
            self.radicande()
        )
    }
}
