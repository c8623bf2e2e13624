use softcore_asm::{
    assembler::{assemble, AssemblyError},
    config::{MEMORY_SIZE, START_ADDRESS},
    mif::{runs, Mif},
};

use pretty_assertions::assert_eq;

#[test]
fn test_runs_cover_image() -> Result<(), AssemblyError> {
    let assembly = assemble(include_str!("../demos/loop.asm"))?;
    let runs = runs(assembly.image.as_slice());

    let mut next = 0;
    for run in &runs {
        assert_eq!(run.start, next);
        assert!(run.end >= run.start);
        assert!(assembly.image.slice(run.start, run.end + 1).iter().all(|&b| b == run.value));
        next = run.end + 1;
    }
    assert_eq!(next, MEMORY_SIZE);

    // Neighbouring runs always differ, otherwise they would have been merged
    for pair in runs.windows(2) {
        assert!(pair[0].value != pair[1].value);
    }

    Ok(())
}

#[test]
fn test_mif_output() -> Result<(), AssemblyError> {
    let assembly = assemble("LDA #$05\nSTA $10\n")?;
    let mif = Mif::new(assembly.image.as_slice(), START_ADDRESS).to_string();

    assert_eq!(
        mif,
        "-- Memory Initialization File (.mif)
-- Generated by softcore-asm
-- Instructions start at address 0x1000

DEPTH = 16384;
WIDTH = 8;
ADDRESS_RADIX = HEX;
DATA_RADIX = HEX;

CONTENT BEGIN
    [0000..0FFF] : 00;
    1000 : A9;
    1001 : 05;
    1002 : 85;
    1003 : 10;
    [1004..3FFF] : 00;
END;
"
    );

    Ok(())
}
