// src/noyau/nombre.rs
//
// Le type valeur du noyau : a + b·√c, avec a, b rationnels exacts et
// c entier sans facteur carré (c = 0 pour les valeurs purement
// rationnelles). Immuable après construction ; toute opération renvoie
// une nouvelle valeur déjà canonique.
//
// Champs dérivés :
// - norme  : a² − b²·c, calculée à la construction (produit conjugué)
// - valeur : vue f64 indicative, jamais utilisée pour l'exactitude
// - conjugué / inverse : mémoïsés paresseusement (OnceLock)

use crate::noyau::canon::forme_canonique;
use crate::noyau::entree::{EnEntier, EnRationnel};
use crate::noyau::erreur::ErreurRadical;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct NombreRadical {
    ajout: BigRational,
    facteur: BigRational,
    radicande: BigInt,

    norme: BigRational,
    valeur: f64,

    conjugue_memo: OnceLock<Box<NombreRadical>>,
    inverse_memo: OnceLock<Box<NombreRadical>>,
}

/* ------------------------ construction ------------------------ */

impl NombreRadical {
    /// Construit depuis un triplet déjà validé (`radicande >= 0`),
    /// en passant par la forme canonique. Seule porte de création.
    pub(crate) fn depuis_parties(
        ajout: BigRational,
        facteur: BigRational,
        radicande: BigInt,
    ) -> Self {
        let (ajout, facteur, radicande) = forme_canonique(ajout, facteur, radicande);

        let c = BigRational::from_integer(radicande.clone());
        let norme = &ajout * &ajout - &facteur * &facteur * c;
        let valeur = vue_f64(&ajout, &facteur, &radicande);

        NombreRadical {
            ajout,
            facteur,
            radicande,
            norme,
            valeur,
            conjugue_memo: OnceLock::new(),
            inverse_memo: OnceLock::new(),
        }
    }

    /// Valeur purement rationnelle : a → (a, 0, 0).
    pub fn rationnel<A: EnRationnel>(a: A) -> Result<Self, ErreurRadical> {
        Ok(Self::depuis_parties(
            a.en_rationnel()?,
            BigRational::zero(),
            BigInt::zero(),
        ))
    }

    /// a + √c → (a, 1, c).
    pub fn avec_racine<A: EnRationnel, C: EnEntier>(a: A, c: C) -> Result<Self, ErreurRadical> {
        let radicande = radicande_valide(c)?;
        Ok(Self::depuis_parties(
            a.en_rationnel()?,
            BigRational::one(),
            radicande,
        ))
    }

    /// Forme générale a + b·√c.
    pub fn nouveau<A: EnRationnel, B: EnRationnel, C: EnEntier>(
        a: A,
        b: B,
        c: C,
    ) -> Result<Self, ErreurRadical> {
        let radicande = radicande_valide(c)?;
        Ok(Self::depuis_parties(
            a.en_rationnel()?,
            b.en_rationnel()?,
            radicande,
        ))
    }

    pub(crate) fn un() -> Self {
        Self::depuis_parties(BigRational::one(), BigRational::zero(), BigInt::zero())
    }
}

fn radicande_valide<C: EnEntier>(c: C) -> Result<BigInt, ErreurRadical> {
    let radicande = c.en_entier()?;
    if radicande.is_negative() {
        return Err(ErreurRadical::EntreeInvalide(format!(
            "radicande négatif : {radicande}"
        )));
    }
    Ok(radicande)
}

fn vue_f64(ajout: &BigRational, facteur: &BigRational, radicande: &BigInt) -> f64 {
    let a = ajout.to_f64().unwrap_or(f64::NAN);
    if facteur.is_zero() {
        return a;
    }
    let b = facteur.to_f64().unwrap_or(f64::NAN);
    let c = radicande.to_f64().unwrap_or(f64::NAN);
    a + b * c.sqrt()
}

/* ------------------------ accès ------------------------ */

impl NombreRadical {
    pub fn ajout(&self) -> &BigRational {
        &self.ajout
    }

    pub fn facteur(&self) -> &BigRational {
        &self.facteur
    }

    pub fn radicande(&self) -> &BigInt {
        &self.radicande
    }

    /// Produit conjugué a² − b²·c (nul si et seulement si la valeur est nulle,
    /// le radicande canonique étant sans facteur carré).
    pub fn norme(&self) -> &BigRational {
        &self.norme
    }

    /// Vue flottante indicative. Jamais utilisée par l'égalité ni l'ordre.
    pub fn valeur(&self) -> f64 {
        self.valeur
    }

    pub fn est_rationnel(&self) -> bool {
        self.facteur.is_zero()
    }

    /// La valeur exacte si elle est purement rationnelle.
    pub fn en_rationnel(&self) -> Option<&BigRational> {
        self.est_rationnel().then_some(&self.ajout)
    }
}

/* ------------------------ dérivés mémoïsés ------------------------ */

impl NombreRadical {
    /// Conjugué a − b·√c. Toujours défini ; mémoïsé au premier appel.
    pub fn conjugue(&self) -> &NombreRadical {
        let boite = self.conjugue_memo.get_or_init(|| {
            Box::new(Self::depuis_parties(
                self.ajout.clone(),
                -self.facteur.clone(),
                self.radicande.clone(),
            ))
        });
        &**boite
    }

    /// Inverse multiplicatif conjugué/norme. Mémoïsé au premier appel.
    /// `DivisionParZero` si la norme est nulle (la valeur vaut zéro).
    pub fn inverse(&self) -> Result<&NombreRadical, ErreurRadical> {
        if self.norme.is_zero() {
            return Err(ErreurRadical::DivisionParZero);
        }
        let boite = self.inverse_memo.get_or_init(|| {
            Box::new(Self::depuis_parties(
                &self.ajout / &self.norme,
                -(&self.facteur / &self.norme),
                self.radicande.clone(),
            ))
        });
        Ok(&**boite)
    }
}

/* ------------------------ arithmétique ------------------------ */

impl NombreRadical {
    /// Radicande partagé par les deux opérandes : égaux, ou l'un des deux
    /// nul (un rationnel pur adopte le radical de l'autre).
    pub fn radical_commun(&self, autre: &Self) -> Result<BigInt, ErreurRadical> {
        if self.radicande.is_zero() {
            return Ok(autre.radicande.clone());
        }
        if autre.radicande.is_zero() || self.radicande == autre.radicande {
            return Ok(self.radicande.clone());
        }
        Err(ErreurRadical::RadicalIncompatible(
            self.radicande.clone(),
            autre.radicande.clone(),
        ))
    }

    /// Addition composante par composante sous radical commun.
    pub fn somme(&self, autre: &Self) -> Result<Self, ErreurRadical> {
        let radicande = self.radical_commun(autre)?;
        Ok(Self::depuis_parties(
            &self.ajout + &autre.ajout,
            &self.facteur + &autre.facteur,
            radicande,
        ))
    }

    /// x − y = x + (−y).
    pub fn difference(&self, autre: &Self) -> Result<Self, ErreurRadical> {
        self.somme(&-autre)
    }

    /// (a + b√c)(a' + b'√c) = (aa' + bb'c) + (ab' + a'b)√c.
    pub fn produit(&self, autre: &Self) -> Result<Self, ErreurRadical> {
        let radicande = self.radical_commun(autre)?;
        let c = BigRational::from_integer(radicande.clone());

        let ajout = &self.ajout * &autre.ajout + &self.facteur * &autre.facteur * c;
        let facteur = &self.ajout * &autre.facteur + &autre.ajout * &self.facteur;

        Ok(Self::depuis_parties(ajout, facteur, radicande))
    }

    /// x / y = x · y⁻¹. `DivisionParZero` si la norme de y est nulle.
    pub fn quotient(&self, autre: &Self) -> Result<Self, ErreurRadical> {
        self.produit(autre.inverse()?)
    }

    /// Exponentiation entière par carrés successifs.
    /// `n = 0` donne 1 pour toute base (y compris 0⁰ = 1) ;
    /// `n < 0` passe par l'inverse.
    pub fn puissance(&self, n: i64) -> Result<Self, ErreurRadical> {
        if n == 0 {
            return Ok(Self::un());
        }

        let base = if n < 0 { self.inverse()?.clone() } else { self.clone() };

        let mut exp = n.unsigned_abs();
        let mut carre = base;
        let mut acc = Self::un();

        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.produit(&carre)?;
            }
            exp >>= 1;
            if exp > 0 {
                carre = carre.produit(&carre)?;
            }
        }

        Ok(acc)
    }

    /// Valeur absolue par test de signe exact (jamais via la vue f64).
    pub fn absolu(&self) -> Self {
        if self.signe() == Ordering::Less {
            -self
        } else {
            self.clone()
        }
    }
}

impl Neg for &NombreRadical {
    type Output = NombreRadical;

    fn neg(self) -> NombreRadical {
        NombreRadical::depuis_parties(
            -self.ajout.clone(),
            -self.facteur.clone(),
            self.radicande.clone(),
        )
    }
}

impl Neg for NombreRadical {
    type Output = NombreRadical;

    fn neg(self) -> NombreRadical {
        -&self
    }
}

/* ------------------------ égalité structurelle ------------------------ */

// Égalité et hachage portent sur le triplet canonique seul : les champs
// dérivés (norme, valeur, mémos) en découlent.

impl PartialEq for NombreRadical {
    fn eq(&self, other: &Self) -> bool {
        self.ajout == other.ajout
            && self.facteur == other.facteur
            && self.radicande == other.radicande
    }
}

impl Eq for NombreRadical {}

impl Hash for NombreRadical {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ajout.hash(state);
        self.facteur.hash(state);
        self.radicande.hash(state);
    }
}

/* ------------------------ tests ------------------------ */
