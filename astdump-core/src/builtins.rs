//! Node layout of the C compiler whose trees the printer dumps.
//!
//! Entries are grouped by the structure that owns them: frontend symbol
//! table, C AST, three-address code, backend symbol table. Emission order
//! follows this table, so new nodes go next to their siblings.

use crate::error::SchemaError;
use crate::schema::{NodeSpec, Schema};

macro_rules! node {
    ($name:literal) => {
        NodeSpec { name: $name, scalars: &[], children: &[] }
    };
    ($name:literal, [$(($ty:literal, $field:literal)),* $(,)?], [$($child:literal),* $(,)?]) => {
        NodeSpec {
            name: $name,
            scalars: &[$(($ty, $field)),*],
            children: &[$($child),*],
        }
    };
}

/// The complete, ordered node table.
pub const COMPILER_AST: &[NodeSpec] = &[
    // frontend symbol table
    node!("Type"),
    node!("Char"),
    node!("SChar"),
    node!("UChar"),
    node!("Int"),
    node!("Long"),
    node!("UInt"),
    node!("ULong"),
    node!("Double"),
    node!("Void"),
    node!("FunType", [("TULong", "param_reg_mask"), ("TULong", "ret_reg_mask")], ["[param_types", "ret_type"]),
    node!("Pointer", [], ["ref_type"]),
    node!("Array", [("TLong", "size")], ["elem_type"]),
    node!("Structure", [("TIdentifier", "tag"), ("Bool", "is_union")], []),
    node!("StaticInit"),
    node!("IntInit", [("TInt", "value")], []),
    node!("LongInit", [("TLong", "value")], []),
    node!("UIntInit", [("TUInt", "value")], []),
    node!("ULongInit", [("TULong", "value")], []),
    node!("DoubleInit", [("TIdentifier", "dbl_const")], []),
    node!("ZeroInit", [("TLong", "byte")], []),
    node!("StringInit", [("TIdentifier", "string_const"), ("Bool", "is_null_term")], ["literal"]),
    node!("PointerInit", [("TIdentifier", "name")], []),
    node!("InitialValue"),
    node!("Tentative"),
    node!("Initial", [], ["[static_inits"]),
    node!("NoInitializer"),
    node!("IdentifierAttr"),
    node!("FunAttr", [("Bool", "is_defined"), ("Bool", "is_global")], []),
    node!("StaticAttr", [("Bool", "is_global")], ["init"]),
    node!("ConstantAttr", [], ["static_init"]),
    node!("LocalAttr"),
    node!("Symbol", [], ["type_t", "attrs"]),
    node!("StructMember", [("TLong", "offset")], ["member_type"]),
    node!("StructTypedef", [("TInt", "alignment"), ("TLong", "size"), ("TIdentifier", "[member_names")], ["(members"]),
    // C AST
    node!("CConst"),
    node!("CConstInt", [("TInt", "value")], []),
    node!("CConstLong", [("TLong", "value")], []),
    node!("CConstDouble", [("TDouble", "value")], []),
    node!("CConstUInt", [("TUInt", "value")], []),
    node!("CConstULong", [("TULong", "value")], []),
    node!("CStringLiteral", [("TInt", "[value")], []),
    node!("CUnaryOp"),
    node!("CComplement"),
    node!("CNegate"),
    node!("CNot"),
    node!("CPrefix"),
    node!("CPostfix"),
    node!("CBinaryOp"),
    node!("CAdd"),
    node!("CSubtract"),
    node!("CMultiply"),
    node!("CDivide"),
    node!("CRemainder"),
    node!("CBitAnd"),
    node!("CBitOr"),
    node!("CBitXor"),
    node!("CBitShiftLeft"),
    node!("CBitShiftRight"),
    node!("CBitShrArithmetic"),
    node!("CAnd"),
    node!("COr"),
    node!("CEqual"),
    node!("CNotEqual"),
    node!("CLessThan"),
    node!("CLessOrEqual"),
    node!("CGreaterThan"),
    node!("CGreaterOrEqual"),
    node!("CExp", [], ["exp_type"]),
    node!("CConstant", [], ["constant", "exp_type"]),
    node!("CString", [], ["literal", "exp_type"]),
    node!("CVar", [("TIdentifier", "name")], ["exp_type"]),
    node!("CCast", [], ["exp", "target_type", "exp_type"]),
    node!("CUnary", [], ["unary_op", "exp", "exp_type"]),
    node!("CBinary", [], ["binary_op", "exp_left", "exp_right", "exp_type"]),
    node!("CAssignment", [], ["unary_op", "exp_left", "exp_right", "exp_type"]),
    node!("CConditional", [], ["condition", "exp_middle", "exp_right", "exp_type"]),
    node!("CFunctionCall", [("TIdentifier", "name")], ["[args", "exp_type"]),
    node!("CDereference", [], ["exp", "exp_type"]),
    node!("CAddrOf", [], ["exp", "exp_type"]),
    node!("CSubscript", [], ["primary_exp", "subscript_exp", "exp_type"]),
    node!("CSizeOf", [], ["exp", "exp_type"]),
    node!("CSizeOfT", [], ["target_type", "exp_type"]),
    node!("CDot", [("TIdentifier", "member")], ["structure", "exp_type"]),
    node!("CArrow", [("TIdentifier", "member")], ["pointer", "exp_type"]),
    node!("CStatement"),
    node!("CReturn", [], ["exp"]),
    node!("CExpression", [], ["exp"]),
    node!("CIf", [], ["condition", "then", "else_fi"]),
    node!("CGoto", [("TIdentifier", "target")], []),
    node!("CLabel", [("TIdentifier", "target")], ["jump_to"]),
    node!("CCompound", [], ["block"]),
    node!("CWhile", [("TIdentifier", "target")], ["condition", "body"]),
    node!("CDoWhile", [("TIdentifier", "target")], ["condition", "body"]),
    node!("CFor", [("TIdentifier", "target")], ["init", "condition", "post", "body"]),
    node!("CSwitch", [("TIdentifier", "target"), ("Bool", "is_default")], ["match", "body", "[cases"]),
    node!("CCase", [("TIdentifier", "target")], ["value", "jump_to"]),
    node!("CDefault", [("TIdentifier", "target")], ["jump_to"]),
    node!("CBreak", [("TIdentifier", "target")], []),
    node!("CContinue", [("TIdentifier", "target")], []),
    node!("CNull"),
    node!("CForInit"),
    node!("CInitDecl", [], ["init"]),
    node!("CInitExp", [], ["init"]),
    node!("CBlock"),
    node!("CB", [], ["[block_items"]),
    node!("CBlockItem"),
    node!("CS", [], ["statement"]),
    node!("CD", [], ["declaration"]),
    node!("CStorageClass"),
    node!("CStatic"),
    node!("CExtern"),
    node!("CInitializer", [], ["init_type"]),
    node!("CSingleInit", [], ["exp", "init_type"]),
    node!("CCompoundInit", [], ["[initializers", "init_type"]),
    node!("CMemberDeclaration", [("TIdentifier", "member_name")], ["member_type"]),
    node!("CStructDeclaration", [("TIdentifier", "tag"), ("Bool", "is_union")], ["[members"]),
    node!("CFunctionDeclaration", [("TIdentifier", "name"), ("TIdentifier", "[params")], ["body", "fun_type", "storage_class"]),
    node!("CVariableDeclaration", [("TIdentifier", "name")], ["init", "var_type", "storage_class"]),
    node!("CDeclaration"),
    node!("CFunDecl", [], ["function_decl"]),
    node!("CVarDecl", [], ["variable_decl"]),
    node!("CStructDecl", [], ["struct_decl"]),
    node!("CProgram", [], ["[declarations"]),
    // three-address code
    node!("TacUnaryOp"),
    node!("TacComplement"),
    node!("TacNegate"),
    node!("TacNot"),
    node!("TacBinaryOp"),
    node!("TacAdd"),
    node!("TacSubtract"),
    node!("TacMultiply"),
    node!("TacDivide"),
    node!("TacRemainder"),
    node!("TacBitAnd"),
    node!("TacBitOr"),
    node!("TacBitXor"),
    node!("TacBitShiftLeft"),
    node!("TacBitShiftRight"),
    node!("TacBitShrArithmetic"),
    node!("TacEqual"),
    node!("TacNotEqual"),
    node!("TacLessThan"),
    node!("TacLessOrEqual"),
    node!("TacGreaterThan"),
    node!("TacGreaterOrEqual"),
    node!("TacValue"),
    node!("TacConstant", [], ["constant"]),
    node!("TacVariable", [("TIdentifier", "name")], []),
    node!("TacExpResult"),
    node!("TacPlainOperand", [], ["val"]),
    node!("TacDereferencedPointer", [], ["val"]),
    node!("TacSubObject", [("TIdentifier", "base_name"), ("TLong", "offset")], []),
    node!("TacInstruction"),
    node!("TacReturn", [], ["val"]),
    node!("TacSignExtend", [], ["src", "dst"]),
    node!("TacTruncate", [], ["src", "dst"]),
    node!("TacZeroExtend", [], ["src", "dst"]),
    node!("TacDoubleToInt", [], ["src", "dst"]),
    node!("TacDoubleToUInt", [], ["src", "dst"]),
    node!("TacIntToDouble", [], ["src", "dst"]),
    node!("TacUIntToDouble", [], ["src", "dst"]),
    node!("TacFunCall", [("TIdentifier", "name")], ["[args", "dst"]),
    node!("TacUnary", [], ["unary_op", "src", "dst"]),
    node!("TacBinary", [], ["binary_op", "src1", "src2", "dst"]),
    node!("TacCopy", [], ["src", "dst"]),
    node!("TacGetAddress", [], ["src", "dst"]),
    node!("TacLoad", [], ["src_ptr", "dst"]),
    node!("TacStore", [], ["src", "dst_ptr"]),
    node!("TacAddPtr", [("TLong", "scale")], ["src_ptr", "idx", "dst"]),
    node!("TacCopyToOffset", [("TIdentifier", "dst_name"), ("TLong", "offset")], ["src"]),
    node!("TacCopyFromOffset", [("TIdentifier", "src_name"), ("TLong", "offset")], ["dst"]),
    node!("TacJump", [("TIdentifier", "target")], []),
    node!("TacJumpIfZero", [("TIdentifier", "target")], ["condition"]),
    node!("TacJumpIfNotZero", [("TIdentifier", "target")], ["condition"]),
    node!("TacLabel", [("TIdentifier", "name")], []),
    node!("TacTopLevel"),
    node!("TacFunction", [("TIdentifier", "name"), ("Bool", "is_global"), ("TIdentifier", "[params")], ["[body"]),
    node!("TacStaticVariable", [("TIdentifier", "name"), ("Bool", "is_global")], ["static_init_type", "[static_inits"]),
    node!("TacStaticConstant", [("TIdentifier", "name")], ["static_init_type", "static_init"]),
    node!("TacProgram", [], ["[static_constant_top_levels", "[static_variable_top_levels", "[function_top_levels"]),
    // backend symbol table
    node!("AssemblyType"),
    node!("Byte"),
    node!("LongWord"),
    node!("QuadWord"),
    node!("BackendDouble"),
    node!("ByteArray", [("TLong", "size"), ("TInt", "alignment")], []),
    node!("BackendSymbol"),
    node!("BackendObj", [("Bool", "is_static"), ("Bool", "is_constant")], ["assembly_type"]),
    node!("BackendFun", [("Bool", "is_defined")], ["[callee_saved_registers"]),
];

/// Build the registry for `COMPILER_AST`.
pub fn compiler_schema() -> Result<Schema, SchemaError> {
    Schema::from_specs(COMPILER_AST)
}
