// src/noyau/cache.rs
//
// Table d'internement des instances canoniques.
// clef (ajout, facteur, radicande) -> Weak<NombreRadical>
//
// La table ne possède jamais les instances : valeurs Weak, purge
// opportuniste des entrées mortes à chaque défaut. Couche optionnelle :
// l'égalité structurelle n'en dépend à aucun moment.

use crate::noyau::nombre::NombreRadical;
use num_bigint::BigInt;
use num_rational::BigRational;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, Weak};

type CleCanonique = (BigRational, BigRational, BigInt);

static TABLE_INTERNE: OnceLock<Mutex<HashMap<CleCanonique, Weak<NombreRadical>>>> =
    OnceLock::new();

fn table() -> &'static Mutex<HashMap<CleCanonique, Weak<NombreRadical>>> {
    TABLE_INTERNE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Renvoie l'instance partagée pour cette valeur canonique : celle déjà
/// vivante dans la table s'il y en a une, sinon `n` y est inscrite.
pub fn interner(n: NombreRadical) -> Arc<NombreRadical> {
    let cle = (
        n.ajout().clone(),
        n.facteur().clone(),
        n.radicande().clone(),
    );

    let mut carte = table().lock().expect("mutex table interne");

    match carte.get(&cle).and_then(Weak::upgrade) {
        Some(vivante) => vivante,
        None => {
            // Défaut : purge des entrées mortes avant insertion.
            carte.retain(|_, faible| faible.strong_count() > 0);

            let partagee = Arc::new(n);
            carte.insert(cle, Arc::downgrade(&partagee));
            partagee
        }
    }
}
