//! `geo.dat` body cards built from setup bodies.

use std::collections::HashMap;

use shield_ir::{Body, Geometry, Vec3};

use crate::context::IdMap;
use crate::error::{EntityKind, Result, SerializeError};

/// Edge length of the cube enclosing the whole geometry.
pub const BLACKHOLE_SIZE: f64 = 500.0;

/// One body in engine form.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyCard {
    /// Engine body number.
    pub id: i64,
    /// Three-letter body type, e.g. `RPP`.
    pub identifier: &'static str,
    /// Numeric parameters in card order.
    pub arguments: Vec<f64>,
}

fn box_card(id: i64, center: Vec3, size: Vec3) -> BodyCard {
    BodyCard {
        id,
        identifier: "RPP",
        arguments: vec![
            center.x - size.x / 2.0,
            center.x + size.x / 2.0,
            center.y - size.y / 2.0,
            center.y + size.y / 2.0,
            center.z - size.z / 2.0,
            center.z + size.z / 2.0,
        ],
    }
}

/// Box centered at the origin that contains every zone.
pub fn blackhole(id: i64) -> BodyCard {
    box_card(
        id,
        Vec3::default(),
        Vec3::new(BLACKHOLE_SIZE, BLACKHOLE_SIZE, BLACKHOLE_SIZE),
    )
}

fn invalid(body: &Body, message: &str) -> SerializeError {
    SerializeError::entity(EntityKind::Body, body.id, "geo.dat", message)
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn convert_body(id: i64, body: &Body) -> Result<BodyCard> {
    match body.geometry {
        Geometry::Sphere { center, radius } => {
            if !positive(radius) {
                return Err(invalid(body, "Sphere radius must be positive"));
            }
            Ok(BodyCard {
                id,
                identifier: "SPH",
                arguments: vec![center.x, center.y, center.z, radius],
            })
        }
        Geometry::Cuboid { center, size } => {
            if ![size.x, size.y, size.z].into_iter().all(positive) {
                return Err(invalid(body, "Cuboid size must be positive along every axis"));
            }
            Ok(box_card(id, center, size))
        }
        Geometry::Cylinder {
            base_center,
            height,
            radius,
        } => {
            if !positive(height) {
                return Err(invalid(body, "Cylinder height must be positive"));
            }
            if !positive(radius) {
                return Err(invalid(body, "Cylinder radius must be positive"));
            }
            Ok(BodyCard {
                id,
                identifier: "RCC",
                arguments: vec![
                    base_center.x,
                    base_center.y,
                    base_center.z,
                    0.0,
                    height,
                    0.0,
                    radius,
                ],
            })
        }
    }
}

/// Build every body card in engine-number order.
pub fn convert_bodies(bodies: &[Body], ids: &IdMap) -> Result<Vec<BodyCard>> {
    let by_id: HashMap<i64, &Body> = bodies.iter().map(|b| (b.id, b)).collect();
    ids.iter()
        .filter_map(|(engine, domain)| by_id.get(&domain).map(|b| (engine, *b)))
        .map(|(engine, body)| convert_body(engine, body))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::assign_body_ids;

    fn body(id: i64, geometry: Geometry) -> Body {
        Body {
            id,
            name: None,
            geometry,
        }
    }

    fn convert(bodies: &[Body]) -> Result<Vec<BodyCard>> {
        convert_bodies(bodies, &assign_body_ids(bodies)?)
    }

    #[test]
    fn test_all_shapes() {
        let bodies = vec![
            body(
                9,
                Geometry::Cylinder {
                    base_center: Vec3::new(10.1, 20.2, 30.3),
                    height: 24.4,
                    radius: 99999.5,
                },
            ),
            body(
                3,
                Geometry::Cuboid {
                    center: Vec3::new(10.0, 20.0, 30.0),
                    size: Vec3::new(100.0, 200.0, 30.5),
                },
            ),
            body(
                5,
                Geometry::Sphere {
                    center: Vec3::new(20.0, 31.0, 0.99),
                    radius: 0.01,
                },
            ),
        ];
        let cards = convert(&bodies).unwrap();
        assert_eq!(
            cards,
            vec![
                BodyCard {
                    id: 1,
                    identifier: "RPP",
                    arguments: vec![-40.0, 60.0, -80.0, 120.0, 14.75, 45.25],
                },
                BodyCard {
                    id: 2,
                    identifier: "SPH",
                    arguments: vec![20.0, 31.0, 0.99, 0.01],
                },
                BodyCard {
                    id: 3,
                    identifier: "RCC",
                    arguments: vec![10.1, 20.2, 30.3, 0.0, 24.4, 0.0, 99999.5],
                },
            ]
        );
    }

    #[test]
    fn test_blackhole() {
        let card = blackhole(4);
        assert_eq!(card.id, 4);
        assert_eq!(card.identifier, "RPP");
        assert_eq!(card.arguments, vec![-250.0, 250.0, -250.0, 250.0, -250.0, 250.0]);
    }

    #[test]
    fn test_invalid_sizes() {
        let flat = body(
            7,
            Geometry::Cuboid {
                center: Vec3::default(),
                size: Vec3::new(1.0, 0.0, 1.0),
            },
        );
        let err = convert(&[flat]).unwrap_err().to_string();
        assert!(err.starts_with("[serializer] Body{Id: 7} -> geo.dat:"));

        let point = body(
            8,
            Geometry::Sphere {
                center: Vec3::default(),
                radius: 0.0,
            },
        );
        assert!(convert(&[point]).is_err());

        let disc = body(
            2,
            Geometry::Cylinder {
                base_center: Vec3::default(),
                height: -1.0,
                radius: 1.0,
            },
        );
        assert!(convert(&[disc]).is_err());
    }

    #[test]
    fn test_non_finite_sizes() {
        let nan_ball = body(
            3,
            Geometry::Sphere {
                center: Vec3::default(),
                radius: f64::NAN,
            },
        );
        let err = convert(&[nan_ball]).unwrap_err().to_string();
        assert!(err.starts_with("[serializer] Body{Id: 3} -> geo.dat:"));
        assert!(err.contains("Sphere radius must be positive"));

        let nan_box = body(
            4,
            Geometry::Cuboid {
                center: Vec3::default(),
                size: Vec3::new(1.0, f64::NAN, 1.0),
            },
        );
        assert!(convert(&[nan_box]).is_err());

        let endless = body(
            5,
            Geometry::Cylinder {
                base_center: Vec3::default(),
                height: f64::INFINITY,
                radius: 1.0,
            },
        );
        assert!(convert(&[endless]).is_err());
    }
}
