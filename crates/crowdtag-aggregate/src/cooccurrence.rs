//! Claim co-occurrence network over the most frequent atomic claims.

use std::collections::{HashMap, HashSet};

use crowdtag_core::Event;
use crowdtag_tagging::split_claims;

use crate::claims::claim_counts;
use crate::types::{ClaimLink, ClaimNetwork};

/// Nodes are the `top_n` most frequent claims. A link joins two nodes when
/// at least one event lists both; its value is the number of such events.
///
/// Links are undirected and emitted once per pair, ordered by node rank.
pub fn claim_network(events: &[Event], top_n: usize) -> ClaimNetwork {
    let mut nodes = claim_counts(events);
    nodes.truncate(top_n);
    let position: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.claim.as_str(), i))
        .collect();

    let mut pairs: HashMap<(usize, usize), usize> = HashMap::new();
    for event in events {
        let present: HashSet<usize> = split_claims(event.claims())
            .into_iter()
            .filter_map(|claim| position.get(claim).copied())
            .collect();
        let mut present: Vec<usize> = present.into_iter().collect();
        present.sort_unstable();
        for (k, &i) in present.iter().enumerate() {
            for &j in &present[k + 1..] {
                *pairs.entry((i, j)).or_insert(0) += 1;
            }
        }
    }

    let mut pairs: Vec<((usize, usize), usize)> = pairs.into_iter().collect();
    pairs.sort_unstable_by_key(|(pair, _)| *pair);
    let links = pairs
        .into_iter()
        .map(|((i, j), value)| ClaimLink {
            source: nodes[i].claim.clone(),
            target: nodes[j].claim.clone(),
            value,
        })
        .collect();

    ClaimNetwork { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<Event> {
        vec![
            Event::new().with_claims("for democracy; against Trump"),
            Event::new().with_claims("against Trump; for democracy; for democracy"),
            Event::new().with_claims("for democracy; for climate action"),
            Event::new().with_claims("for transit"),
            Event::new().with_claims("Unknown"),
        ]
    }

    #[test]
    fn test_claim_network_links() {
        let network = claim_network(&events(), 20);
        assert_eq!(network.nodes[0].claim, "for democracy");
        assert_eq!(network.nodes[0].count, 4);
        assert_eq!(network.nodes.len(), 4);
        assert_eq!(
            network.links,
            vec![
                ClaimLink {
                    source: "for democracy".into(),
                    target: "against Trump".into(),
                    value: 2,
                },
                ClaimLink {
                    source: "for democracy".into(),
                    target: "for climate action".into(),
                    value: 1,
                },
            ]
        );
    }

    #[test]
    fn test_network_limited_to_top_claims() {
        let network = claim_network(&events(), 2);
        assert_eq!(network.nodes.len(), 2);
        assert_eq!(network.links.len(), 1);
        assert_eq!(network.links[0].target, "against Trump");
    }

    #[test]
    fn test_empty_network() {
        assert_eq!(claim_network(&[], 20), ClaimNetwork::default());
    }
}
