use brunch::{Bench, benches};

const SIMPLE: &str = "SELECT * FROM users WHERE id = 1";
const MEDIUM: &str = "SELECT u.id, u.name, count(o.id) AS orders \
                      FROM users u LEFT JOIN orders o ON o.user_id = u.id \
                      WHERE u.active AND u.created_at > '2024-01-01' \
                      GROUP BY u.id, u.name HAVING count(o.id) > 3 \
                      ORDER BY orders DESC LIMIT 100";
const COMPLEX: &str = "WITH RECURSIVE tree (id, parent_id, depth) AS ( \
                       SELECT id, parent_id, 0 FROM nodes WHERE parent_id IS NULL \
                       UNION ALL \
                       SELECT n.id, n.parent_id, t.depth + 1 FROM nodes n JOIN tree t ON n.parent_id = t.id) \
                       SELECT depth, count(*) FROM tree GROUP BY ROLLUP (depth) ORDER BY 1 NULLS LAST";

benches!(
    Bench::new("parse simple select").run(|| pg_parse::parse(SIMPLE).unwrap()),
    Bench::new("parse aggregate join").run(|| pg_parse::parse(MEDIUM).unwrap()),
    Bench::new("parse recursive cte").run(|| pg_parse::parse(COMPLEX).unwrap()),
    Bench::new("parse and dump").run(|| {
        let result = pg_parse::parse(MEDIUM).unwrap();
        pg_parse::node_to_string(&result.stmts[0].stmt)
    }),
);
