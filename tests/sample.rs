use monkey_map::{
    parse_input, Board, Cube, CubeError, Direction, FaceMap, Net, Outcome, Start,
};

const SAMPLE: &str = "        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5
";

const SMALL: &str = "    ..
    ..
......
......
    ....
    ....
";

fn flat(input: &str, start: &Start) -> Result<Outcome, CubeError> {
    let (grid, path) = parse_input(input)?;

    Ok(Board::new(grid).replay(&path, start)?.0)
}

fn cube(input: &str, start: &Start) -> Result<Outcome, CubeError> {
    let (grid, path) = parse_input(input)?;

    Ok(Cube::new(Net::new(&grid)?)?.replay(&path, start)?.0)
}

fn with_path(net: &str, path: &str) -> String {
    format!("{net}\n{path}\n")
}

#[test]
fn sample_flat() {
    let end = flat(SAMPLE, &Start::default()).unwrap();

    assert_eq!(
        end,
        Outcome {
            row: 6,
            col: 8,
            facing: Direction::East
        }
    );
    assert_eq!(end.password(), 6032);
}

#[test]
fn sample_cube() {
    let end = cube(SAMPLE, &Start::default()).unwrap();

    assert_eq!(
        end,
        Outcome {
            row: 5,
            col: 7,
            facing: Direction::North
        }
    );
    assert_eq!(end.password(), 5031);
}

#[test]
fn sample_folds_into_cube_faces() {
    let (grid, _) = parse_input(SAMPLE).unwrap();
    let cube = Cube::new(Net::new(&grid).unwrap()).unwrap();

    assert_eq!(cube.edge(), 4);
    assert_eq!(cube.tiles().len(), 96);

    let faces = FaceMap(&cube).to_string();
    let lines: Vec<_> = faces.lines().collect();

    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "        BBBB");
    assert_eq!(lines[4], "KKKKLLLLFFFF");
    assert_eq!(lines[11], "        TTTTRRRR");
}

#[test]
fn small_cube_crosses_two_edges() {
    let end = cube(&with_path(SMALL, "2R2"), &Start::default()).unwrap();

    assert_eq!(
        end,
        Outcome {
            row: 3,
            col: 6,
            facing: Direction::West
        }
    );
}

#[test]
fn small_net_walked_flat() {
    let end = flat(&with_path(SMALL, "2R2"), &Start::default()).unwrap();

    assert_eq!(
        end,
        Outcome {
            row: 3,
            col: 5,
            facing: Direction::South
        }
    );
}

#[test]
fn custom_start() {
    let start = Start::at(4, 5, Direction::South);

    assert_eq!(
        cube(&with_path(SMALL, "3"), &start).unwrap().password(),
        4011
    );
    assert!(matches!(
        cube(&with_path(SMALL, "3"), &Start::at(1, 1, Direction::East)),
        Err(CubeError::InvalidStart { row: 1, col: 1 })
    ));
}

#[test]
fn bad_inputs_are_reported() {
    assert!(matches!(
        cube(&with_path(SMALL, "2R2X"), &Start::default()),
        Err(CubeError::InvalidPathSyntax {
            offset: 3,
            found: 'X'
        })
    ));

    assert!(matches!(
        cube(&with_path("....\n...\n", "1"), &Start::default()),
        Err(CubeError::MalformedNet { tiles: 7 })
    ));

    assert!(matches!(
        cube(&with_path("...\n...\n", "1"), &Start::default()),
        Err(CubeError::UnfoldableNet { .. })
    ));

    assert!(matches!(
        cube(SMALL, &Start::default()),
        Err(CubeError::MalformedInput(_))
    ));
}
