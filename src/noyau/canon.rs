// src/noyau/canon.rs
//
// Forme canonique du triplet (ajout, facteur, radicande) :
// - extraction des carrés parfaits : c = s²·c', avec c' sans facteur carré
// - repli de s dans le facteur ; si c' = 1, repli de facteur·s dans l'ajout
// - radicande 0 = forme canonique d'une valeur purement rationnelle
//   (facteur nul => radicande forcé à 0 : représentation unique)
//
// Essais de division jusqu'à √c : suffisant pour les magnitudes attendues.
// Pas de factorisation complète de très grands radicandes (limitation assumée).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Réduit `(ajout, facteur, radicande)` en triplet canonique.
///
/// Précondition : `radicande >= 0` (contrôlée par les constructeurs publics).
/// Après réduction :
/// - le radicande est sans facteur carré (> 1), ou nul ;
/// - `facteur == 0` implique `radicande == 0`.
pub(crate) fn forme_canonique(
    ajout: BigRational,
    facteur: BigRational,
    radicande: BigInt,
) -> (BigRational, BigRational, BigInt) {
    debug_assert!(!radicande.is_negative(), "radicande négatif en canon");

    // b·√0 = 0 ; facteur nul : la partie radicale s'effondre entièrement.
    if radicande.is_zero() || facteur.is_zero() {
        return (ajout, BigRational::zero(), BigInt::zero());
    }

    let (s, reste) = extrait_carre_parfait(&radicande);

    // c = s² : carré parfait, repli complet dans l'ajout.
    if reste.is_one() {
        let ajout = ajout + facteur * BigRational::from_integer(s);
        return (ajout, BigRational::zero(), BigInt::zero());
    }

    (ajout, facteur * BigRational::from_integer(s), reste)
}

/// Décompose n > 0 en n = s² * t, avec t sans facteur carré.
fn extrait_carre_parfait(n: &BigInt) -> (BigInt, BigInt) {
    if n.is_one() {
        return (BigInt::one(), BigInt::one());
    }

    let mut reste = n.clone();
    let mut s = BigInt::one();

    // Essai par p = 2 puis impairs.
    let mut p = BigInt::from(2);
    while &p * &p <= reste {
        let p2 = &p * &p;

        while (&reste % &p2).is_zero() {
            reste /= &p2;
            s *= &p;
        }

        if p == BigInt::from(2) {
            p = BigInt::from(3);
        } else {
            p += 2;
        }
    }

    (s, reste)
}
