use crate::{
    assembler::{
        codegen::opcode::OPCODE_MAPPING,
        location::LocationCounter,
        parser,
        symbols::{
            resolve::{relative_offset, resolve_operand},
            LabelTable,
        },
        AssemblyError, ErrorKind,
    },
    ast::{AddressingMode, Directive, Instruction, Node, SourceLine},
    config::AssemblerConfig,
    memory::MemoryImage,
};

/// Mapping from instruction definitions to opcodes.
pub mod opcode;

/// Compile a single instruction at `address` to machine code.
///
/// Labels are looked up in the label table. Nothing is returned on error, so a failing
/// instruction never leaves partial bytes in the image.
#[tracing::instrument(skip(labels))]
pub fn instruction_to_bytes(
    ins: &Instruction,
    address: u32,
    labels: &LabelTable,
) -> Result<Vec<u8>, ErrorKind> {
    let entry = OPCODE_MAPPING.opcode(ins.mnemonic, ins.addr_mode)?;
    let value = resolve_operand(&ins.operand, labels)?;

    let mut bytes = vec![entry.opcode];
    match ins.addr_mode {
        AddressingMode::Relative => {
            bytes.push(relative_offset(address, entry.length, value)? as u8);
        }
        _ => {
            let [low, high, ..] = value.to_le_bytes();
            bytes.extend_from_slice(&[low, high][..ins.addr_mode.operand_size()]);
        }
    }

    Ok(bytes)
}

/// Generate machine code for every line into a fresh memory image (pass 2).
///
/// The label table must be complete, i.e. produced by pass 1 over the same lines. Returns the
/// image and the final value of the location counter.
#[tracing::instrument(skip(lines, labels))]
pub fn generate(
    lines: &[SourceLine],
    labels: &LabelTable,
    config: &AssemblerConfig,
) -> Result<(MemoryImage, u32), AssemblyError> {
    let mut image = MemoryImage::new(config.capacity);
    let mut location = LocationCounter::new(config.start_address);

    for line in lines {
        generate_line(line, labels, &mut location, &mut image)
            .map_err(|kind| AssemblyError::new(line.number, kind))?;
    }

    Ok((image, location.address()))
}

fn generate_line(
    line: &SourceLine,
    labels: &LabelTable,
    location: &mut LocationCounter,
    image: &mut MemoryImage,
) -> Result<(), ErrorKind> {
    let Some(node) = parser::parse_line(line)? else {
        return Ok(());
    };

    tracing::trace!("${:04X}: {}", location.address(), node);
    match node {
        Node::Instruction(ins) => {
            let bytes = instruction_to_bytes(&ins, location.address(), labels)?;
            write_bytes(image, location, &bytes)
        }
        Node::Directive(Directive::Origin(address)) => {
            tracing::debug!("Origin moved to ${:04X}", address);
            location.set(address);
            Ok(())
        }
        Node::Directive(Directive::Byte(values)) => {
            let bytes: Vec<u8> = values.iter().map(|&value| value as u8).collect();
            write_bytes(image, location, &bytes)
        }
        Node::Directive(Directive::Word(words)) => {
            let mut bytes = Vec::with_capacity(words.len() * 2);
            for word in &words {
                let value = resolve_operand(word, labels)?;
                bytes.extend_from_slice(&(value as u16).to_le_bytes());
            }
            write_bytes(image, location, &bytes)
        }
    }
}

fn write_bytes(
    image: &mut MemoryImage,
    location: &mut LocationCounter,
    bytes: &[u8],
) -> Result<(), ErrorKind> {
    let start = location.address() as usize;
    location.advance(bytes.len())?;
    for (offset, &byte) in bytes.iter().enumerate() {
        image.write_byte(start + offset, byte);
    }

    Ok(())
}
