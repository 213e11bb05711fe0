//! URL and query construction for the search REST surface

use fragnet_domain::constants::API_PATH;
use fragnet_domain::{Calculation, ExpansionQuery, NeighbourhoodQuery};

/// Search service URLs rooted at one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Build the URL set for `host`, e.g. `http://fragnet.squonk.it:8080`
    #[must_use]
    pub fn new(host: &str) -> Self {
        Self { base: format!("{}/{API_PATH}", host.trim_end_matches('/')) }
    }

    /// API root, `<host>/fragnet-search/rest/v2`
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn ping(&self) -> String {
        format!("{}/ping", self.base)
    }

    /// Neighbourhood search for `smiles`; the molecule becomes one escaped
    /// path segment
    #[must_use]
    pub fn neighbourhood(&self, smiles: &str) -> String {
        format!("{}/search/neighbourhood/{}", self.base, urlencoding::encode(smiles))
    }

    #[must_use]
    pub fn expansion(&self, smiles: &str) -> String {
        format!("{}/search/expand/{}", self.base, urlencoding::encode(smiles))
    }

    #[must_use]
    pub fn availability(&self, smiles: &str) -> String {
        format!("{}/search/availability/{}", self.base, urlencoding::encode(smiles))
    }

    #[must_use]
    pub fn suppliers(&self) -> String {
        format!("{}/search/suppliers", self.base)
    }

    #[must_use]
    pub fn calculations(&self) -> String {
        format!("{}/search/calcs", self.base)
    }
}

/// Query parameters for a validated neighbourhood search
///
/// `calcs` and `suppliers` are comma-joined and only present when non-empty.
#[must_use]
pub fn neighbourhood_params(
    query: &NeighbourhoodQuery,
    calculations: &[Calculation],
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("hac", query.hac.to_string()),
        ("rac", query.rac.to_string()),
        ("hops", query.hops.to_string()),
        ("limit", query.limit.to_string()),
    ];

    if !calculations.is_empty() {
        let joined = calculations.iter().map(|calc| calc.as_str()).collect::<Vec<_>>().join(",");
        params.push(("calcs", joined));
    }
    if !query.suppliers.is_empty() {
        params.push(("suppliers", query.suppliers.join(",")));
    }

    params
}

/// Query parameters for a validated expansion search
#[must_use]
pub fn expansion_params(query: &ExpansionQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("hac", query.hac.to_string()),
        ("rac", query.rac.to_string()),
        ("hops", query.hops.to_string()),
    ];
    if !query.suppliers.is_empty() {
        params.push(("suppliers", query.suppliers.join(",")));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_hang_off_api_root() {
        let endpoints = Endpoints::new("http://fragnet.squonk.it:8080/");

        assert_eq!(endpoints.base(), "http://fragnet.squonk.it:8080/fragnet-search/rest/v2");
        assert_eq!(endpoints.ping(), "http://fragnet.squonk.it:8080/fragnet-search/rest/v2/ping");
        assert_eq!(
            endpoints.suppliers(),
            "http://fragnet.squonk.it:8080/fragnet-search/rest/v2/search/suppliers"
        );
        assert_eq!(
            endpoints.calculations(),
            "http://fragnet.squonk.it:8080/fragnet-search/rest/v2/search/calcs"
        );
    }

    #[test]
    fn smiles_escaped_as_single_segment() {
        let endpoints = Endpoints::new("http://localhost");

        assert_eq!(
            endpoints.neighbourhood("c1ccc(Nc2nc3ccccc3o2)cc1"),
            "http://localhost/fragnet-search/rest/v2/search/neighbourhood/c1ccc%28Nc2nc3ccccc3o2%29cc1"
        );
        assert_eq!(
            endpoints.availability("C/C=C/C#N"),
            "http://localhost/fragnet-search/rest/v2/search/availability/C%2FC%3DC%2FC%23N"
        );
    }

    #[test]
    fn optional_params_omitted_when_empty() {
        let query = NeighbourhoodQuery::new("CCO", 3, 1, 2, 100);

        assert_eq!(
            neighbourhood_params(&query, &[]),
            vec![
                ("hac", "3".to_string()),
                ("rac", "1".to_string()),
                ("hops", "2".to_string()),
                ("limit", "100".to_string()),
            ]
        );
    }

    #[test]
    fn optional_params_comma_joined() {
        let query = NeighbourhoodQuery::new("CCO", 3, 1, 1, 10)
            .with_suppliers(["MolPort", "eMolecules-BB"]);
        let params = neighbourhood_params(&query, &[Calculation::Logp, Calculation::Tpsa]);

        assert!(params.contains(&("calcs", "LOGP,TPSA".to_string())));
        assert!(params.contains(&("suppliers", "MolPort,eMolecules-BB".to_string())));
    }

    #[test]
    fn expansion_url_and_params() {
        let endpoints = Endpoints::new("http://localhost");
        assert_eq!(
            endpoints.expansion("c1ccc(Nc2nc3ccccc3o2)cc1"),
            "http://localhost/fragnet-search/rest/v2/search/expand/c1ccc%28Nc2nc3ccccc3o2%29cc1"
        );

        let query = ExpansionQuery::new("CCO", 3, 1, 3);
        assert_eq!(
            expansion_params(&query),
            vec![("hac", "3".to_string()), ("rac", "1".to_string()), ("hops", "3".to_string())]
        );

        let params = expansion_params(&query.with_suppliers(["MolPort", "Enamine REAL"]));
        assert_eq!(params.last(), Some(&("suppliers", "MolPort,Enamine REAL".to_string())));
    }
}
