// src/noyau/compare.rs
//
// Comparaison exacte et conversions numériques.
// - signe_surd : signe de u + v·√c par cas puis élévation au carré
//   avec suivi du signe (aucun flottant, aucun epsilon)
// - Ord total sur NombreRadical, y compris entre radicaux distincts
//   (au plus deux élévations au carré)
// - conversions : f64, Complex64, entiers arrondis (vue flottante,
//   non exacte dès que la partie radicale est non nulle)

use crate::noyau::nombre::NombreRadical;
use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{FromPrimitive, Signed, Zero};
use std::cmp::Ordering;

/* ------------------------ signe exact ------------------------ */

/// Signe exact de u + v·√c, pour c >= 0.
///
/// Cas directs quand u ou v est nul ou que les signes concordent ;
/// sinon une seule élévation au carré tranche : pour u > 0 > v,
/// u + v√c > 0 équivaut à u² > v²·c.
pub(crate) fn signe_surd(u: &BigRational, v: &BigRational, c: &BigInt) -> Ordering {
    let zero = BigRational::zero();

    if v.is_zero() || c.is_zero() {
        return u.cmp(&zero);
    }
    if u.is_zero() {
        return v.cmp(&zero);
    }

    match (u.is_positive(), v.is_positive()) {
        (true, true) => Ordering::Greater,
        (false, false) => Ordering::Less,
        (true, false) => {
            let c_rat = BigRational::from_integer(c.clone());
            (u * u).cmp(&(v * v * c_rat))
        }
        (false, true) => {
            let c_rat = BigRational::from_integer(c.clone());
            (v * v * c_rat).cmp(&(u * u))
        }
    }
}

impl NombreRadical {
    /// Signe exact de la valeur (jamais via la vue f64).
    pub fn signe(&self) -> Ordering {
        signe_surd(self.ajout(), self.facteur(), self.radicande())
    }
}

/* ------------------------ ordre total ------------------------ */

impl Ord for NombreRadical {
    fn cmp(&self, autre: &Self) -> Ordering {
        // Triplets canoniques égaux : valeurs égales, point final.
        if self == autre {
            return Ordering::Equal;
        }

        let p = self.ajout() - autre.ajout();

        // Même famille de radical : différence composante par composante.
        if self.radicande() == autre.radicande() {
            let q = self.facteur() - autre.facteur();
            return signe_surd(&p, &q, self.radicande());
        }
        if self.est_rationnel() {
            let q = -autre.facteur().clone();
            return signe_surd(&p, &q, autre.radicande());
        }
        if autre.est_rationnel() {
            return signe_surd(&p, self.facteur(), self.radicande());
        }

        // Deux radicaux distincts non nuls : p + q√c face à r√c'.
        let q = self.facteur();
        let r = autre.facteur();
        let c = self.radicande();

        let signe_gauche = signe_surd(&p, q, c);
        let signe_droite = r.cmp(&BigRational::zero());

        if signe_gauche != signe_droite {
            return signe_gauche.cmp(&signe_droite);
        }

        // Même signe strict des deux côtés : une élévation au carré.
        // (p + q√c)² − (r√c')² = (p² + q²c − r²c') + 2pq·√c
        let c_rat = BigRational::from_integer(c.clone());
        let cp_rat = BigRational::from_integer(autre.radicande().clone());
        let u = &p * &p + q * q * c_rat - r * r * cp_rat;
        let v = BigRational::from_integer(BigInt::from(2)) * &p * q;

        let signe_carre = signe_surd(&u, &v, c);
        if signe_gauche == Ordering::Greater {
            signe_carre
        } else {
            signe_carre.reverse()
        }
    }
}

impl PartialOrd for NombreRadical {
    fn partial_cmp(&self, autre: &Self) -> Option<Ordering> {
        Some(self.cmp(autre))
    }
}

/* ------------------------ conversions ------------------------ */

impl NombreRadical {
    /// Vue f64 (identique à `valeur()`).
    pub fn en_f64(&self) -> f64 {
        self.valeur()
    }

    /// Plongement dans le plan complexe, partie imaginaire nulle.
    pub fn en_complexe(&self) -> Complex64 {
        Complex64::new(self.valeur(), 0.0)
    }

    /// Partie entière vers zéro, depuis la vue f64 (non exacte dès que
    /// la partie radicale est non nulle). `None` si la vue n'est pas finie.
    pub fn tronque(&self) -> Option<BigInt> {
        entier_depuis_f64(self.valeur().trunc())
    }

    /// Arrondi vers −∞, depuis la vue f64.
    pub fn plancher(&self) -> Option<BigInt> {
        entier_depuis_f64(self.valeur().floor())
    }

    /// Arrondi vers +∞, depuis la vue f64.
    pub fn plafond(&self) -> Option<BigInt> {
        entier_depuis_f64(self.valeur().ceil())
    }

    /// Arrondi au plus proche (demi vers l'extérieur), depuis la vue f64.
    pub fn arrondi(&self) -> Option<BigInt> {
        entier_depuis_f64(self.valeur().round())
    }
}

fn entier_depuis_f64(x: f64) -> Option<BigInt> {
    if !x.is_finite() {
        return None;
    }
    BigInt::from_f64(x)
}

/* ------------------------ tests ------------------------ */
