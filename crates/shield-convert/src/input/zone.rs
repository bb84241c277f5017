//! Zone forest and its conversion into `geo.dat` zone records.
//!
//! Zones only point at their parent. The forest is stored as an arena with a
//! child index derived once by grouping on `parent_id`; a synthetic root
//! built from the blackhole body holds all top-level zones.

use std::collections::{HashMap, HashSet};

use shield_ir::{MaterialId, Zone, ZoneId, ROOT_ZONE_PARENT};
use tracing::debug;

use crate::algebra::{Construction, Expr};
use crate::context::IdMap;
use crate::error::{EntityKind, Result, SerializeError};
use crate::tables::{BLACK_HOLE_CODE, VACUUM_CODE};

const FILE: &str = "geo.dat";

/// One zone in engine form.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCard {
    /// Engine zone number (1-based emission order).
    pub id: i64,
    /// Zone this card was built from, `None` for the blackhole zone.
    pub domain_id: Option<ZoneId>,
    /// Engine medium number filling the zone.
    pub material: i64,
    /// Zone description.
    pub constructions: Vec<Construction>,
}

#[derive(Debug)]
struct ZoneNode {
    domain_id: Option<ZoneId>,
    expr: Expr,
    material: i64,
    children: Vec<usize>,
}

/// Arena of zones rooted at the blackhole zone.
#[derive(Debug)]
pub struct ZoneForest {
    nodes: Vec<ZoneNode>,
    root: usize,
}

/// Lookups needed to translate zones into engine numbering.
pub struct ZoneRefs<'a> {
    /// Body numbering.
    pub bodies: &'a IdMap,
    /// Medium numbering.
    pub materials: &'a IdMap,
    /// Materials that map onto the engine vacuum.
    pub vacuum: &'a HashSet<MaterialId>,
    /// Engine number of the blackhole body.
    pub blackhole: i64,
}

fn zone_error(zone: &Zone, message: String) -> SerializeError {
    SerializeError::entity(EntityKind::Zone, zone.id, FILE, message)
}

impl ZoneRefs<'_> {
    fn body(&self, zone: &Zone, id: i64) -> Result<i64> {
        self.bodies
            .engine(id)
            .ok_or_else(|| zone_error(zone, format!("Cannot find body: {}", id)))
    }

    fn material(&self, zone: &Zone) -> Result<i64> {
        if self.vacuum.contains(&zone.material_id) {
            return Ok(VACUUM_CODE);
        }
        self.materials
            .engine(zone.material_id)
            .ok_or_else(|| zone_error(zone, format!("Cannot find material: {}", zone.material_id)))
    }

    fn expr(&self, zone: &Zone) -> Result<Expr> {
        let base = self.body(zone, zone.base_id)?;
        let operations = zone
            .construction
            .iter()
            .map(|op| Ok((self.body(zone, op.body_id)?, op.kind)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Expr::from_construction(base, &operations))
    }
}

impl ZoneForest {
    /// Build the forest, rejecting dangling references and parent cycles.
    pub fn build(zones: &[Zone], refs: &ZoneRefs<'_>) -> Result<Self> {
        let mut sorted: Vec<&Zone> = zones.iter().collect();
        sorted.sort_by_key(|z| z.id);

        let mut index: HashMap<ZoneId, usize> = HashMap::with_capacity(sorted.len());
        let mut nodes = Vec::with_capacity(sorted.len() + 1);
        for zone in &sorted {
            if zone.id == ROOT_ZONE_PARENT {
                return Err(zone_error(zone, format!("Zone ID {} is reserved", ROOT_ZONE_PARENT)));
            }
            if index.insert(zone.id, nodes.len()).is_some() {
                return Err(zone_error(zone, "duplicate ID".into()));
            }
            nodes.push(ZoneNode {
                domain_id: Some(zone.id),
                expr: refs.expr(zone)?,
                material: refs.material(zone)?,
                children: Vec::new(),
            });
        }

        let root = nodes.len();
        nodes.push(ZoneNode {
            domain_id: None,
            expr: Expr::body(refs.blackhole),
            material: BLACK_HOLE_CODE,
            children: Vec::new(),
        });

        for (child, zone) in sorted.iter().enumerate() {
            let parent = if zone.parent_id == ROOT_ZONE_PARENT {
                root
            } else {
                *index.get(&zone.parent_id).ok_or_else(|| {
                    zone_error(zone, format!("Cannot find parent zone: {}", zone.parent_id))
                })?
            };
            nodes[parent].children.push(child);
        }

        let forest = Self { nodes, root };
        forest.check_reachable(&sorted)?;
        Ok(forest)
    }

    /// Every zone must hang below the root; the rest sit on parent cycles.
    fn check_reachable(&self, sorted: &[&Zone]) -> Result<()> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            seen[node] = true;
            stack.extend(self.nodes[node].children.iter().copied());
        }
        match sorted.iter().zip(&seen).find(|(_, reached)| !**reached) {
            Some((zone, _)) => Err(zone_error(
                zone,
                format!("Zone is part of a parent cycle (parent {})", zone.parent_id),
            )),
            None => Ok(()),
        }
    }

    /// Emit zone records in depth-first post-order, children first.
    pub fn into_cards(self) -> Vec<ZoneCard> {
        let mut cards = Vec::with_capacity(self.nodes.len());
        self.emit(self.root, &mut cards);
        debug!(zones = cards.len(), "zone forest flattened");
        cards
    }

    fn emit(&self, index: usize, cards: &mut Vec<ZoneCard>) {
        let node = &self.nodes[index];
        for &child in &node.children {
            self.emit(child, cards);
        }
        let children = node.children.iter().map(|&c| self.nodes[c].expr.clone());
        let expr = match Expr::union_all(children) {
            Some(inner) => node.expr.clone().subtract(inner),
            None => node.expr.clone(),
        };
        cards.push(ZoneCard {
            id: cards.len() as i64 + 1,
            domain_id: node.domain_id,
            material: node.material,
            constructions: expr.into_constructions(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{SetOp, Sign};
    use shield_ir::Operation;
    use std::collections::BTreeMap;

    struct Fixture {
        bodies: IdMap,
        materials: IdMap,
        vacuum: HashSet<MaterialId>,
    }

    impl Fixture {
        fn new() -> Self {
            // identity numbering: domain body n -> engine body n
            let bodies = (1..=8_i64).map(|i| (i, i)).collect::<BTreeMap<_, _>>();
            let materials = [(1_i64, 10_i64), (2, 20)]
                .into_iter()
                .collect::<BTreeMap<_, _>>();
            Self {
                bodies: bodies.into(),
                materials: materials.into(),
                vacuum: [99].into_iter().collect(),
            }
        }

        fn refs(&self) -> ZoneRefs<'_> {
            ZoneRefs {
                bodies: &self.bodies,
                materials: &self.materials,
                vacuum: &self.vacuum,
                blackhole: 9,
            }
        }
    }

    fn zone(id: i64, parent_id: i64, base_id: i64, construction: Vec<Operation>) -> Zone {
        Zone {
            id,
            parent_id,
            base_id,
            material_id: 10,
            construction,
        }
    }

    fn signed(constructions: &[Construction]) -> Vec<(bool, char, i64)> {
        constructions
            .iter()
            .map(|c| (c.op == SetOp::Union, c.sign.symbol(), c.body))
            .collect()
    }

    #[test]
    fn test_single_zone_inside_blackhole() {
        let fixture = Fixture::new();
        let zones = vec![zone(
            5,
            0,
            1,
            vec![Operation::union(2), Operation::intersect(3), Operation::subtract(4)],
        )];
        let cards = ZoneForest::build(&zones, &fixture.refs()).unwrap().into_cards();
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[0].domain_id, Some(5));
        assert_eq!(cards[0].material, 1);
        assert_eq!(
            signed(&cards[0].constructions),
            vec![
                (false, '+', 1),
                (false, '+', 3),
                (false, '-', 4),
                (true, '+', 2),
                (false, '+', 3),
                (false, '-', 4),
            ]
        );

        assert_eq!(cards[1].id, 2);
        assert_eq!(cards[1].domain_id, None);
        assert_eq!(cards[1].material, BLACK_HOLE_CODE);
        // 9 - ((1 | 2) & 3 & -4)
        assert_eq!(
            signed(&cards[1].constructions),
            vec![
                (false, '+', 9),
                (false, '-', 1),
                (false, '-', 2),
                (true, '+', 9),
                (false, '-', 3),
                (true, '+', 9),
                (false, '+', 4),
            ]
        );
    }

    #[test]
    fn test_child_is_excluded_from_parent() {
        let fixture = Fixture::new();
        let zones = vec![zone(1, 0, 2, vec![]), zone(2, 1, 1, vec![])];
        let cards = ZoneForest::build(&zones, &fixture.refs()).unwrap().into_cards();
        let ids: Vec<_> = cards.iter().map(|c| c.domain_id).collect();
        assert_eq!(ids, vec![Some(2), Some(1), None]);
        assert_eq!(
            cards[1].constructions,
            vec![
                Construction {
                    op: SetOp::Intersection,
                    sign: Sign::Plus,
                    body: 2
                },
                Construction {
                    op: SetOp::Intersection,
                    sign: Sign::Minus,
                    body: 1
                },
            ]
        );
    }

    #[test]
    fn test_post_order_numbering() {
        let fixture = Fixture::new();
        let zones = vec![
            zone(30, 0, 7, vec![Operation::subtract(8)]),
            zone(10, 30, 1, vec![]),
            zone(20, 30, 5, vec![]),
            zone(40, 0, 6, vec![]),
        ];
        let cards = ZoneForest::build(&zones, &fixture.refs()).unwrap().into_cards();
        let order: Vec<_> = cards.iter().map(|c| (c.id, c.domain_id)).collect();
        assert_eq!(
            order,
            vec![(1, Some(10)), (2, Some(20)), (3, Some(30)), (4, Some(40)), (5, None)]
        );
    }

    #[test]
    fn test_vacuum_zone() {
        let fixture = Fixture::new();
        let mut air = zone(1, 0, 1, vec![]);
        air.material_id = 99;
        let cards = ZoneForest::build(&[air], &fixture.refs()).unwrap().into_cards();
        assert_eq!(cards[0].material, VACUUM_CODE);
    }

    #[test]
    fn test_dangling_references() {
        let fixture = Fixture::new();
        let err = ZoneForest::build(&[zone(3, 0, 42, vec![])], &fixture.refs()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[serializer] Zone{Id: 3} -> geo.dat: Cannot find body: 42"
        );

        let mut unfilled = zone(4, 0, 1, vec![]);
        unfilled.material_id = 77;
        assert!(ZoneForest::build(&[unfilled], &fixture.refs()).is_err());

        let orphan = zone(5, 6, 1, vec![]);
        let err = ZoneForest::build(&[orphan], &fixture.refs()).unwrap_err().to_string();
        assert!(err.contains("Cannot find parent zone: 6"));
    }

    #[test]
    fn test_parent_cycle_rejected() {
        let fixture = Fixture::new();
        let zones = vec![
            zone(1, 0, 1, vec![]),
            zone(2, 3, 2, vec![]),
            zone(3, 2, 3, vec![]),
        ];
        let err = ZoneForest::build(&zones, &fixture.refs()).unwrap_err();
        assert!(matches!(err, SerializeError::Entity { kind: EntityKind::Zone, id: 2, .. }));

        let selfish = zone(4, 4, 1, vec![]);
        assert!(ZoneForest::build(&[selfish], &fixture.refs()).is_err());
    }
}
