use super::*;

const N: usize = 100;
const EPS: f64 = 1e-9;

fn glider_grid() -> TorusGrid {
    let mut grid = TorusGrid::blank(N).unwrap();
    for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        grid.set_cell(row, col, true);
    }
    grid
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPS, "{} != {}", a, b);
}

#[test]
fn test_sprite_counts() {
    let grid = TorusGrid::new(N, 42).unwrap();
    let mut out = vec![];

    let ortho = OrthographicMapper::default();
    ortho.map(&grid, 0., &mut out);
    assert_eq!(out.len(), N * N);
    assert_eq!(out.len(), ortho.sprite_count(N));

    let cloud = PointCloudMapper::default();
    cloud.map(&grid, 0., &mut out);
    assert_eq!(out.len(), (N + 1) * (N + 1));
    assert_eq!(out.len(), cloud.sprite_count(N));
}

#[test]
fn test_map_is_pure() {
    let grid = TorusGrid::new(N, 7).unwrap();
    let before = grid.cells().to_vec();
    for variant in [Variant::Orthographic, Variant::PointCloud] {
        let mapper = variant.mapper();
        let (mut a, mut b) = (vec![], vec![]);
        mapper.map(&grid, 1234.5, &mut a);
        mapper.map(&grid, 1234.5, &mut b);
        assert_eq!(a, b);
    }
    assert_eq!(grid.cells(), before.as_slice());
    assert_eq!(grid.generation(), 0);
}

#[test]
fn test_orthographic_positions_without_rotation() {
    let grid = glider_grid();
    let mut out = vec![];
    OrthographicMapper::default().map(&grid, 0., &mut out);

    // (0, 0) sits on the outer equator at x = R + r
    let s = out[0];
    assert_close(s.x, 300. + (275. + 225.) * 0.5);
    assert_close(s.y, 300.);
    assert_eq!(s.z, None);

    // a quarter turn along the ring
    let s = out[N / 4];
    assert_close(s.x, 300.);
    assert_close(s.y, 300. + 500. * 0.5);
}

#[test]
fn test_orthographic_rotation_keeps_center() {
    let mapper = OrthographicMapper::default();
    // opposite points of the outer equator stay symmetric about the center
    for time in [0., 1000., 31415.9, 1e6] {
        let [x1, y1] = mapper.project(time, 0., 0.);
        let [x2, y2] = mapper.project(time, std::f64::consts::PI, 0.);
        assert!((x1 + x2 - 600.).abs() < 1e-6);
        assert!((y1 + y2 - 600.).abs() < 1e-6);
    }
}

#[test]
fn test_orthographic_sprite_style() {
    let grid = glider_grid();
    let mut out = vec![];
    OrthographicMapper::default().map(&grid, 500., &mut out);

    let alive = out[1];
    assert!(alive.alive);
    assert_close(alive.size, 6.);
    assert_close(alive.color.a, 0.8);

    let dead = out[0];
    assert!(!dead.alive);
    assert_close(dead.size, 6. * 0.3);
    assert_eq!(dead.color, Rgba::gray(0x88 as f64 / 255., 0.3));
    assert_eq!(out.iter().filter(|s| s.alive).count(), 5);
}

#[test]
fn test_with_viewport_scales_to_fit() {
    let mapper = OrthographicMapper::with_viewport(1200., 900.);
    assert_close(mapper.scale, 0.5 * 1.5);
    let [x, y] = mapper.project(0., 0., 0.);
    assert_close(x, 600. + 500. * 0.75);
    assert_close(y, 450.);
}

#[test]
fn test_point_cloud_seam_is_closed() {
    let grid = TorusGrid::new(N, 3).unwrap();
    let mut out = vec![];
    PointCloudMapper::default().map(&grid, 0., &mut out);
    let w = N + 1;
    for i in 0..=N {
        for (a, b) in [(out[i * w], out[i * w + N]), (out[i], out[N * w + i])] {
            assert!((a.x - b.x).abs() < 1e-9);
            assert!((a.y - b.y).abs() < 1e-9);
            assert!((a.z.unwrap() - b.z.unwrap()).abs() < 1e-9);
            assert_eq!(a.alive, b.alive);
            assert_eq!(a.size, b.size);
        }
    }
}

#[test]
fn test_point_cloud_world_space() {
    let grid = glider_grid();
    let mut out = vec![];
    PointCloudMapper::default().map(&grid, 0., &mut out);

    let s = out[0];
    assert_close(s.x, 1. + 225. / 275.);
    assert_close(s.y, 0.);
    assert_close(s.z.unwrap(), 0.);
    assert!(!s.alive);

    let s = out[1];
    assert!(s.alive);
    assert_close(s.color.a, 1.);
    assert!(s.size > out[0].size);
}

#[test]
fn test_hue_range() {
    assert_close(cell_hue(0., 0., 0.), 0.);
    for i in 0..1000 {
        let time = i as f64 * 977.3;
        let (u, v) = surface_angles(i % N, (i * 7) % N, N);
        let hue = cell_hue(time, u, v);
        assert!((0.0..360.0).contains(&hue), "hue={}", hue);
    }
}

#[test]
fn test_hsl_to_rgb() {
    let check = |h: f64, s: f64, l: f64, expected: [f64; 3]| {
        let rgb = hsl_to_rgb(h, s, l);
        for (a, b) in rgb.iter().zip(expected) {
            assert_close(*a, b);
        }
    };
    check(0., 1., 0.5, [1., 0., 0.]);
    check(120., 1., 0.5, [0., 1., 0.]);
    check(240., 1., 0.5, [0., 0., 1.]);
    check(360., 1., 0.5, [1., 0., 0.]);
    check(60., 1., 0.5, [1., 1., 0.]);
    check(200., 0., 0.25, [0.25, 0.25, 0.25]);
    check(0., 1., 0.7, [1., 0.4, 0.4]);
    assert_eq!(Rgba::from_hsl(0., 1., 1., 1.).to_bytes(), [255; 4]);
}
