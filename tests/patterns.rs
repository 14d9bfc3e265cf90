use pretty_assertions::assert_eq;

#[test]
fn glider() {
  let board = rle::read_file("tests/fixtures/Glider.rle").unwrap();

  assert_eq!(board.name(), "Glider");
  assert_eq!(board.width(), 3);
  assert_eq!(board.height(), 3);
  assert_eq!(board.rule(), "B3/S23");
  assert_eq!(board.parsed_rule().unwrap().unwrap(), rle::GAME_OF_LIFE);

  assert_eq!(board.render(), " # \n  #\n###");
}

#[test]
fn glider_gun() {
  let board = rle::read_file("tests/fixtures/GliderGun.rle").unwrap();

  assert_eq!(board.name(), "Gosper glider gun");
  assert_eq!(board.width(), 47);
  assert_eq!(board.height(), 14);
  // the old XLife files spell the rule as a bare word
  assert_eq!(board.rule(), "Life");
  assert!(board.parsed_rule().unwrap().is_err());

  let alive = [
    (16, 0),
    (16, 1), (18, 1), (35, 1),
    (16, 2), (17, 2), (35, 2), (37, 2),
    (0, 3), (2, 3), (13, 3), (35, 3), (36, 3),
    (1, 4), (2, 4), (14, 4), (15, 4),
    (1, 5), (13, 5), (14, 5),
    (10, 8), (11, 8), (32, 8), (33, 8),
    (11, 9), (12, 9), (32, 9), (34, 9), (44, 9), (45, 9), (46, 9),
    (10, 10), (32, 10), (44, 10),
    (27, 11), (45, 11),
    (27, 12), (28, 12),
    (26, 13), (28, 13),
  ];

  let mut population = 0;
  for y in 0..board.height() {
    for x in 0..board.width() {
      let expected = alive.contains(&(x, y));
      assert_eq!(board.get(x, y), Some(expected), "cell ({}, {})", x, y);
      population += expected as u32;
    }
  }
  assert_eq!(population, alive.len() as u32);
}

#[test]
fn missing_file() {
  let err = rle::read_file("tests/fixtures/Missing.rle").unwrap_err();
  assert!(matches!(err, rle::Error::FileUnavailable { .. }));
  assert!(err.to_string().contains("Missing.rle"));
}
