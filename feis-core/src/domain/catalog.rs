//! The compiled-in asset catalog, ordered and validated once at construction.

use std::collections::{BTreeMap, HashSet};

use crate::error::CatalogError;

use super::{Asset, Horizon};

/// Ordered mapping from asset key to [`Asset`].
///
/// Declaration order is significant: the first asset is the default
/// selection and rows are listed in this order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    /// Build a catalog, enforcing that every asset carries a non-empty,
    /// finite series for every horizon and that keys are unique.
    pub fn new(assets: Vec<Asset>) -> Result<Self, CatalogError> {
        if assets.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for asset in &assets {
            if !seen.insert(asset.key.as_str()) {
                return Err(CatalogError::DuplicateKey(asset.key.clone()));
            }
            for horizon in Horizon::ALL {
                let series = asset.series_for(horizon).ok_or_else(|| {
                    CatalogError::MissingHorizon {
                        key: asset.key.clone(),
                        horizon,
                    }
                })?;
                if series.is_empty() {
                    return Err(CatalogError::EmptySeries {
                        key: asset.key.clone(),
                        horizon,
                    });
                }
                if series.iter().any(|v| !v.is_finite()) {
                    return Err(CatalogError::NonFiniteValue {
                        key: asset.key.clone(),
                        horizon,
                    });
                }
            }
        }

        Ok(Self { assets })
    }

    pub fn get(&self, key: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The first declared asset (the default selection).
    pub fn first(&self) -> &Asset {
        // Non-empty by construction.
        &self.assets[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Mutable access for the refresh action. Only `day_change_percent`
    /// is meant to be written through this.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Asset> {
        self.assets.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(|a| a.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Position of a key in declaration order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.assets.iter().position(|a| a.key == key)
    }

    /// The six instruments shown on the FEIS market desk.
    pub fn builtin() -> Self {
        let assets = vec![
            asset(
                "sp500",
                "S&P 500",
                "Backbone actions US",
                5095.0,
                0,
                "Indice large actions US. Sert souvent de noyau de portefeuille long terme. Sensible aux taux, aux résultats des grandes entreprises et au sentiment global de risque.",
                "Utilisé via ETF comme socle actions pour un horizon long (10 ans et +). Jamais avec de l’argent nécessaire à court terme.",
                [
                    &[5090.0, 5098.0, 5085.0, 5102.0, 5095.0],
                    &[4950.0, 5000.0, 5040.0, 5070.0, 5095.0],
                    &[4300.0, 4550.0, 4700.0, 4900.0, 5095.0],
                ],
                0.32,
            ),
            asset(
                "nasdaq",
                "NASDAQ 100",
                "Tech / croissance",
                18045.0,
                0,
                "Indice très exposé aux valeurs technologiques. Plus volatil que le S&P 500, réagit fortement aux attentes de croissance et aux taux.",
                "Poche croissance. S’ajoute à un socle plus large (ETF monde / S&P 500), jamais unique pour un débutant.",
                [
                    &[17950.0, 18010.0, 17920.0, 18080.0, 18045.0],
                    &[17000.0, 17400.0, 17700.0, 17900.0, 18045.0],
                    &[13500.0, 15000.0, 16200.0, 17300.0, 18045.0],
                ],
                0.61,
            ),
            asset(
                "cac40",
                "CAC 40",
                "Actions France",
                7420.0,
                0,
                "Indice des grandes valeurs françaises : banque, luxe, industrie. Permet une exposition locale.",
                "Bloc d’exposition France, souvent en complément d’ETF plus globaux. On évite d’y mettre 100 % du portefeuille.",
                [
                    &[7380.0, 7410.0, 7395.0, 7430.0, 7420.0],
                    &[7200.0, 7270.0, 7320.0, 7380.0, 7420.0],
                    &[6600.0, 6950.0, 7120.0, 7300.0, 7420.0],
                ],
                0.18,
            ),
            asset(
                "msci",
                "MSCI World",
                "ETF monde développé",
                322.0,
                2,
                "Panier d’actions de pays développés. Très utilisé en investissement passif : un seul ETF pour couvrir le monde développé.",
                "Candidat idéal pour une épargne programmée long terme, à condition d’accepter la volatilité de court terme.",
                [
                    &[320.8, 321.5, 321.2, 322.4, 322.0],
                    &[311.0, 315.0, 318.0, 320.0, 322.0],
                    &[280.0, 295.0, 305.0, 315.0, 322.0],
                ],
                0.24,
            ),
            asset(
                "btc",
                "Bitcoin",
                "Actif spéculatif",
                68440.0,
                0,
                "Actif très volatil, sans flux de dividendes. Intéressant pour comprendre les cycles et la psychologie de marché, dangereux comme base de patrimoine.",
                "Poche spéculative limitée (0–5 % du patrimoine). Jamais financée à crédit, ni avec l’épargne de sécurité.",
                [
                    &[67500.0, 67900.0, 68200.0, 68700.0, 68440.0],
                    &[61000.0, 64000.0, 66000.0, 67500.0, 68440.0],
                    &[23000.0, 35000.0, 47000.0, 59000.0, 68440.0],
                ],
                1.25,
            ),
            asset(
                "eth",
                "Ethereum",
                "Réseau / smart contracts",
                3905.0,
                0,
                "Token lié à un réseau. Exposé à la DeFi, aux narratifs tech et aux cycles crypto. Risque élevé, incertitude réglementaire.",
                "Poche expérimentale, encore plus limitée que Bitcoin. On y touche après avoir solidifié cash + ETF.",
                [
                    &[3920.0, 3910.0, 3880.0, 3925.0, 3905.0],
                    &[3550.0, 3650.0, 3780.0, 3860.0, 3905.0],
                    &[1600.0, 2200.0, 2800.0, 3400.0, 3905.0],
                ],
                -0.8,
            ),
        ];

        // The built-in data is known to satisfy every catalog invariant.
        Self { assets }
    }
}

#[allow(clippy::too_many_arguments)]
fn asset(
    key: &str,
    name: &str,
    tag: &str,
    base_value: f64,
    value_decimals: u8,
    comment: &str,
    role: &str,
    [short, medium, long]: [&[f64]; 3],
    day_change_percent: f64,
) -> Asset {
    let mut series = BTreeMap::new();
    series.insert(Horizon::Short, short.to_vec());
    series.insert(Horizon::Medium, medium.to_vec());
    series.insert(Horizon::Long, long.to_vec());
    Asset {
        key: key.to_string(),
        name: name.to_string(),
        tag: tag.to_string(),
        comment: comment.to_string(),
        role: role.to_string(),
        base_value,
        value_decimals,
        series,
        day_change_percent,
    }
}
