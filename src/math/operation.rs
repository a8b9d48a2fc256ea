#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operation {
    pub fn char(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Pow => "**",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Sub),
            "*" => Some(Operation::Mul),
            "/" => Some(Operation::Div),
            "**" => Some(Operation::Pow),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Relation {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Relation {
    pub fn char(&self) -> &'static str {
        match self {
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Lt => "<",
            Relation::Le => "<=",
            Relation::Gt => ">",
            Relation::Ge => ">=",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "==" => Some(Relation::Eq),
            "!=" => Some(Relation::Ne),
            "<" => Some(Relation::Lt),
            "<=" => Some(Relation::Le),
            ">" => Some(Relation::Gt),
            ">=" => Some(Relation::Ge),
            _ => None,
        }
    }

    /// The relation that holds with the operands swapped: `a < b` iff `b > a`.
    pub fn flip(&self) -> Self {
        match self {
            Relation::Lt => Relation::Gt,
            Relation::Le => Relation::Ge,
            Relation::Gt => Relation::Lt,
            Relation::Ge => Relation::Le,
            other => *other,
        }
    }
}

#[test]
fn symbol_test() {
    for op in [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div, Operation::Pow] {
        assert_eq!(Operation::from_str(op.char()), Some(op));
    }
    for rel in [Relation::Eq, Relation::Ne, Relation::Lt, Relation::Le, Relation::Gt, Relation::Ge] {
        assert_eq!(Relation::from_str(rel.char()), Some(rel));
        assert_eq!(rel.flip().flip(), rel);
    }
    assert_eq!(Operation::from_str("%"), None);
}
