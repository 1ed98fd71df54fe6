//! Route catalog: validated, read-only candidate routes per chain.
//!
//! The catalog is built once (from the builtin tables or a routes document),
//! validated atomically, and never mutated afterwards. Every read path is a
//! pure function over immutable data, so a catalog behind an `Arc` can be
//! shared across tasks without locking. A configuration change means building
//! a fresh catalog and swapping the shared reference wholesale.

use std::collections::HashSet;

use tracing::info;

use crate::config::RoutesFile;
use crate::error::{AppError, Result};
use crate::types::{Chain, Route};

pub mod defaults;

pub use defaults::default_catalog;

/// Immutable catalog of candidate two-hop routes, partitioned by chain.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    // Indexed by Chain::index(); declaration order preserved per chain.
    routes: [Vec<Route>; Chain::COUNT],
}

impl RouteCatalog {
    /// Routes configured for `chain`, in declaration order.
    ///
    /// A chain with no configured routes yields an empty slice, never an
    /// error, so callers need no absence branch.
    pub fn routes_for_chain(&self, chain: Chain) -> &[Route] {
        &self.routes[chain.index()]
    }

    /// The route named `name` on `chain`, matched exactly (case-sensitive).
    ///
    /// Names are unique per chain (enforced at build), so first match is the
    /// only match.
    pub fn route_by_name(&self, chain: Chain, name: &str) -> Option<&Route> {
        self.routes[chain.index()].iter().find(|r| r.name == name)
    }

    /// Total number of routes across all chains. Diagnostics only.
    pub fn total_route_count(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }

    /// Chains that have at least one route, in [`Chain::ALL`] order.
    pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
        Chain::ALL.into_iter().filter(|c| !self.routes[c.index()].is_empty())
    }

    /// Build a catalog from a parsed routes document.
    pub fn from_routes_file(file: RoutesFile) -> Result<RouteCatalog> {
        let mut builder = CatalogBuilder::new();
        for (chain, specs) in file.chains {
            for spec in specs {
                builder.add_route(chain, spec.into_route(chain)?);
            }
        }
        builder.build()
    }

    /// Log a per-chain listing of the catalog, restricted to `chains`.
    pub fn log_route_stats(&self, chains: &[Chain]) {
        for &chain in chains {
            let routes = self.routes_for_chain(chain);
            info!(chain = %chain, routes = routes.len(), "route listing");
            for route in routes {
                info!(
                    chain = %chain,
                    name = %route.name,
                    fee1 = %route.fee1,
                    fee2 = %route.fee2,
                    "  {}",
                    route.description
                );
            }
        }
        info!(total = self.total_route_count(), "total routes configured");
    }
}

/// Accumulates routes, then validates and freezes them into a [`RouteCatalog`].
///
/// `build` is all-or-nothing: on any violation the catalog is never produced,
/// and a previously built catalog (if any) stays in service untouched.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    routes: [Vec<Route>; Chain::COUNT],
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route to `chain`, keeping declaration order.
    pub fn add_route(&mut self, chain: Chain, route: Route) -> &mut Self {
        self.routes[chain.index()].push(route);
        self
    }

    /// Validate every chain's route list and freeze the catalog.
    ///
    /// Rejects duplicate names within a chain and degenerate hops (a mid
    /// token equal to either endpoint). Address well-formedness and fee
    /// canonicality are already guaranteed by the `Route` type itself.
    pub fn build(self) -> Result<RouteCatalog> {
        for chain in Chain::ALL {
            let routes = &self.routes[chain.index()];
            let mut seen = HashSet::with_capacity(routes.len());
            for route in routes {
                if !seen.insert(route.name.as_str()) {
                    return Err(AppError::DuplicateRouteName {
                        chain,
                        name: route.name.clone(),
                    });
                }
                if route.token_mid == route.token_in || route.token_mid == route.token_out {
                    return Err(AppError::DegenerateHop { chain, name: route.name.clone() });
                }
            }
        }
        Ok(RouteCatalog { routes: self.routes })
    }
}
