use crate::{OpCode, Quadruple};

#[test]
fn opcode_roundtrips_through_u8() {
    let all = [
        OpCode::Assign,
        OpCode::Print,
        OpCode::Jump,
        OpCode::JumpIfFalse,
        OpCode::Label,
        OpCode::Add,
        OpCode::Sub,
        OpCode::Mul,
        OpCode::Div,
        OpCode::Mod,
        OpCode::Neg,
        OpCode::Not,
        OpCode::And,
        OpCode::Or,
        OpCode::Eq,
        OpCode::Ne,
        OpCode::Lt,
        OpCode::Gt,
    ];
    for op in all {
        assert_eq!(OpCode::from_u8(op as u8), Some(op));
    }
}

#[test]
fn opcode_rejects_out_of_range() {
    assert_eq!(OpCode::from_u8(18), None);
    assert_eq!(OpCode::from_u8(255), None);
}

#[test]
fn wire_integers_are_stable() {
    // The wire format depends on these exact values.
    assert_eq!(OpCode::Assign as u8, 0);
    assert_eq!(OpCode::Print as u8, 1);
    assert_eq!(OpCode::Add as u8, 5);
    assert_eq!(OpCode::Lt as u8, 16);
    assert_eq!(OpCode::Gt as u8, 17);
}

#[test]
fn quadruple_display_marks_empty_fields() {
    let q = Quadruple::new(OpCode::Print, "v1", "", "");
    assert_eq!(q.to_string(), "PRINT v1, _, _");

    let q = Quadruple::new(OpCode::Add, "v1", "2", "t1");
    assert_eq!(q.to_string(), "ADD v1, 2, t1");
}
