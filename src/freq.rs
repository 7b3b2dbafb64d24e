//! Note-to-OPL-frequency conversion.
//!
//! Two independent lookup curves exist because the "doom_beta" DMX driver
//! used a different (and much coarser) table than every driver version
//! after it. Both tables, including the last entry of `FREQUENCY_CURVE`,
//! are preserved bit-for-bit from the original driver: that last entry is
//! a known buffer overrun in the original and is kept rather than fixed,
//! since fixing it would change the pitch of the highest note DMX ever
//! actually produced.

/// Frequency values (10-bit F-number, block already folded in for the
/// looped upper range) used by every driver version except `DoomBeta`.
pub const FREQUENCY_CURVE: [u16; 668] = [
    0x133, 0x133, 0x134, 0x134, 0x135, 0x136, 0x136, 0x137,
    0x137, 0x138, 0x138, 0x139, 0x139, 0x13a, 0x13b, 0x13b,
    0x13c, 0x13c, 0x13d, 0x13d, 0x13e, 0x13f, 0x13f, 0x140,
    0x140, 0x141, 0x142, 0x142, 0x143, 0x143, 0x144, 0x144,

    0x145, 0x146, 0x146, 0x147, 0x147, 0x148, 0x149, 0x149,
    0x14a, 0x14a, 0x14b, 0x14c, 0x14c, 0x14d, 0x14d, 0x14e,
    0x14f, 0x14f, 0x150, 0x150, 0x151, 0x152, 0x152, 0x153,
    0x153, 0x154, 0x155, 0x155, 0x156, 0x157, 0x157, 0x158,

    0x158, 0x159, 0x15a, 0x15a, 0x15b, 0x15b, 0x15c, 0x15d,
    0x15d, 0x15e, 0x15f, 0x15f, 0x160, 0x161, 0x161, 0x162,
    0x162, 0x163, 0x164, 0x164, 0x165, 0x166, 0x166, 0x167,
    0x168, 0x168, 0x169, 0x16a, 0x16a, 0x16b, 0x16c, 0x16c,

    0x16d, 0x16e, 0x16e, 0x16f, 0x170, 0x170, 0x171, 0x172,
    0x172, 0x173, 0x174, 0x174, 0x175, 0x176, 0x176, 0x177,
    0x178, 0x178, 0x179, 0x17a, 0x17a, 0x17b, 0x17c, 0x17c,
    0x17d, 0x17e, 0x17e, 0x17f, 0x180, 0x181, 0x181, 0x182,

    0x183, 0x183, 0x184, 0x185, 0x185, 0x186, 0x187, 0x188,
    0x188, 0x189, 0x18a, 0x18a, 0x18b, 0x18c, 0x18d, 0x18d,
    0x18e, 0x18f, 0x18f, 0x190, 0x191, 0x192, 0x192, 0x193,
    0x194, 0x194, 0x195, 0x196, 0x197, 0x197, 0x198, 0x199,

    0x19a, 0x19a, 0x19b, 0x19c, 0x19d, 0x19d, 0x19e, 0x19f,
    0x1a0, 0x1a0, 0x1a1, 0x1a2, 0x1a3, 0x1a3, 0x1a4, 0x1a5,
    0x1a6, 0x1a6, 0x1a7, 0x1a8, 0x1a9, 0x1a9, 0x1aa, 0x1ab,
    0x1ac, 0x1ad, 0x1ad, 0x1ae, 0x1af, 0x1b0, 0x1b0, 0x1b1,

    0x1b2, 0x1b3, 0x1b4, 0x1b4, 0x1b5, 0x1b6, 0x1b7, 0x1b8,
    0x1b8, 0x1b9, 0x1ba, 0x1bb, 0x1bc, 0x1bc, 0x1bd, 0x1be,
    0x1bf, 0x1c0, 0x1c0, 0x1c1, 0x1c2, 0x1c3, 0x1c4, 0x1c4,
    0x1c5, 0x1c6, 0x1c7, 0x1c8, 0x1c9, 0x1c9, 0x1ca, 0x1cb,

    0x1cc, 0x1cd, 0x1ce, 0x1ce, 0x1cf, 0x1d0, 0x1d1, 0x1d2,
    0x1d3, 0x1d3, 0x1d4, 0x1d5, 0x1d6, 0x1d7, 0x1d8, 0x1d8,
    0x1d9, 0x1da, 0x1db, 0x1dc, 0x1dd, 0x1de, 0x1de, 0x1df,
    0x1e0, 0x1e1, 0x1e2, 0x1e3, 0x1e4, 0x1e5, 0x1e5, 0x1e6,

    0x1e7, 0x1e8, 0x1e9, 0x1ea, 0x1eb, 0x1ec, 0x1ed, 0x1ed,
    0x1ee, 0x1ef, 0x1f0, 0x1f1, 0x1f2, 0x1f3, 0x1f4, 0x1f5,
    0x1f6, 0x1f6, 0x1f7, 0x1f8, 0x1f9, 0x1fa, 0x1fb, 0x1fc,
    0x1fd, 0x1fe, 0x1ff, 0x200, 0x201, 0x201, 0x202, 0x203,

    0x204, 0x205, 0x206, 0x207, 0x208, 0x209, 0x20a, 0x20b,
    0x20c, 0x20d, 0x20e, 0x20f, 0x210, 0x210, 0x211, 0x212,
    0x213, 0x214, 0x215, 0x216, 0x217, 0x218, 0x219, 0x21a,
    0x21b, 0x21c, 0x21d, 0x21e, 0x21f, 0x220, 0x221, 0x222,

    0x223, 0x224, 0x225, 0x226, 0x227, 0x228, 0x229, 0x22a,
    0x22b, 0x22c, 0x22d, 0x22e, 0x22f, 0x230, 0x231, 0x232,
    0x233, 0x234, 0x235, 0x236, 0x237, 0x238, 0x239, 0x23a,
    0x23b, 0x23c, 0x23d, 0x23e, 0x23f, 0x240, 0x241, 0x242,

    0x244, 0x245, 0x246, 0x247, 0x248, 0x249, 0x24a, 0x24b,
    0x24c, 0x24d, 0x24e, 0x24f, 0x250, 0x251, 0x252, 0x253,
    0x254, 0x256, 0x257, 0x258, 0x259, 0x25a, 0x25b, 0x25c,
    0x25d, 0x25e, 0x25f, 0x260, 0x262, 0x263, 0x264, 0x265,

    0x266, 0x267, 0x268, 0x269, 0x26a, 0x26c, 0x26d, 0x26e,
    0x26f, 0x270, 0x271, 0x272, 0x273, 0x275, 0x276, 0x277,
    0x278, 0x279, 0x27a, 0x27b, 0x27d, 0x27e, 0x27f, 0x280,
    0x281, 0x282, 0x284, 0x285, 0x286, 0x287, 0x288, 0x289,

    0x28b, 0x28c, 0x28d, 0x28e, 0x28f, 0x290, 0x292, 0x293,
    0x294, 0x295, 0x296, 0x298, 0x299, 0x29a, 0x29b, 0x29c,
    0x29e, 0x29f, 0x2a0, 0x2a1, 0x2a2, 0x2a4, 0x2a5, 0x2a6,
    0x2a7, 0x2a9, 0x2aa, 0x2ab, 0x2ac, 0x2ae, 0x2af, 0x2b0,

    0x2b1, 0x2b2, 0x2b4, 0x2b5, 0x2b6, 0x2b7, 0x2b9, 0x2ba,
    0x2bb, 0x2bd, 0x2be, 0x2bf, 0x2c0, 0x2c2, 0x2c3, 0x2c4,
    0x2c5, 0x2c7, 0x2c8, 0x2c9, 0x2cb, 0x2cc, 0x2cd, 0x2ce,
    0x2d0, 0x2d1, 0x2d2, 0x2d4, 0x2d5, 0x2d6, 0x2d8, 0x2d9,

    0x2da, 0x2dc, 0x2dd, 0x2de, 0x2e0, 0x2e1, 0x2e2, 0x2e4,
    0x2e5, 0x2e6, 0x2e8, 0x2e9, 0x2ea, 0x2ec, 0x2ed, 0x2ee,
    0x2f0, 0x2f1, 0x2f2, 0x2f4, 0x2f5, 0x2f6, 0x2f8, 0x2f9,
    0x2fb, 0x2fc, 0x2fd, 0x2ff, 0x300, 0x302, 0x303, 0x304,

    0x306, 0x307, 0x309, 0x30a, 0x30b, 0x30d, 0x30e, 0x310,
    0x311, 0x312, 0x314, 0x315, 0x317, 0x318, 0x31a, 0x31b,
    0x31c, 0x31e, 0x31f, 0x321, 0x322, 0x324, 0x325, 0x327,
    0x328, 0x329, 0x32b, 0x32c, 0x32e, 0x32f, 0x331, 0x332,

    0x334, 0x335, 0x337, 0x338, 0x33a, 0x33b, 0x33d, 0x33e,
    0x340, 0x341, 0x343, 0x344, 0x346, 0x347, 0x349, 0x34a,
    0x34c, 0x34d, 0x34f, 0x350, 0x352, 0x353, 0x355, 0x357,
    0x358, 0x35a, 0x35b, 0x35d, 0x35e, 0x360, 0x361, 0x363,

    0x365, 0x366, 0x368, 0x369, 0x36b, 0x36c, 0x36e, 0x370,
    0x371, 0x373, 0x374, 0x376, 0x378, 0x379, 0x37b, 0x37c,
    0x37e, 0x380, 0x381, 0x383, 0x384, 0x386, 0x388, 0x389,
    0x38b, 0x38d, 0x38e, 0x390, 0x392, 0x393, 0x395, 0x397,

    0x398, 0x39a, 0x39c, 0x39d, 0x39f, 0x3a1, 0x3a2, 0x3a4,
    0x3a6, 0x3a7, 0x3a9, 0x3ab, 0x3ac, 0x3ae, 0x3b0, 0x3b1,
    0x3b3, 0x3b5, 0x3b7, 0x3b8, 0x3ba, 0x3bc, 0x3bd, 0x3bf,
    0x3c1, 0x3c3, 0x3c4, 0x3c6, 0x3c8, 0x3ca, 0x3cb, 0x3cd,

    0x3cf, 0x3d1, 0x3d2, 0x3d4, 0x3d6, 0x3d8, 0x3da, 0x3db,
    0x3dd, 0x3df, 0x3e1, 0x3e3, 0x3e4, 0x3e6, 0x3e8, 0x3ea,
    0x3ec, 0x3ed, 0x3ef, 0x3f1, 0x3f3, 0x3f5, 0x3f6, 0x3f8,
    0x3fa, 0x3fc, 0x3fe, 0x36c,
];

/// Coarser frequency curve used only by the `DoomBeta` driver version.
pub const FREQUENCY_CURVE_BETA: [u16; 1552] = [
    0x0159, 0x0159, 0x0159, 0x0159, 0x0159, 0x0159, 0x0159, 0x0159,
    0x0159, 0x0159, 0x0159, 0x0159, 0x0159, 0x0159, 0x0159, 0x0159,
    0x015a, 0x015b, 0x015c, 0x015e, 0x015f, 0x0160, 0x0161, 0x0163,
    0x0164, 0x0165, 0x0167, 0x0168, 0x0169, 0x016b, 0x016c, 0x016d,
    0x016e, 0x0170, 0x0171, 0x0172, 0x0174, 0x0175, 0x0176, 0x0178,
    0x0179, 0x017b, 0x017c, 0x017d, 0x017f, 0x0180, 0x0181, 0x0183,
    0x0184, 0x0186, 0x0187, 0x0188, 0x018a, 0x018b, 0x018d, 0x018e,
    0x0190, 0x0191, 0x0193, 0x0194, 0x0195, 0x0197, 0x0198, 0x019a,
    0x019b, 0x019d, 0x019e, 0x01a0, 0x01a1, 0x01a3, 0x01a4, 0x01a6,
    0x01a7, 0x01a9, 0x01ab, 0x01ac, 0x01ae, 0x01af, 0x01b1, 0x01b2,
    0x01b4, 0x01b5, 0x01b7, 0x01b9, 0x01ba, 0x01bc, 0x01bd, 0x01bf,
    0x01c1, 0x01c2, 0x01c4, 0x01c6, 0x01c7, 0x01c9, 0x01ca, 0x01cc,
    0x01ce, 0x01cf, 0x01d1, 0x01d3, 0x01d4, 0x01d6, 0x01d8, 0x01da,
    0x01db, 0x01dd, 0x01df, 0x01e0, 0x01e2, 0x01e4, 0x01e6, 0x01e7,
    0x01e9, 0x01eb, 0x01ed, 0x01ef, 0x01f0, 0x01f2, 0x01f4, 0x01f6,
    0x01f8, 0x01f9, 0x01fb, 0x01fd, 0x01ff, 0x0201, 0x0203, 0x0205,
    0x0207, 0x0208, 0x020a, 0x020c, 0x020e, 0x0210, 0x0212, 0x0214,
    0x0216, 0x0218, 0x021a, 0x021c, 0x021e, 0x0220, 0x0221, 0x0223,
    0x0225, 0x0227, 0x0229, 0x022b, 0x022d, 0x022f, 0x0231, 0x0234,
    0x0236, 0x0238, 0x023a, 0x023c, 0x023e, 0x0240, 0x0242, 0x0244,
    0x0246, 0x0248, 0x024a, 0x024c, 0x024f, 0x0251, 0x0253, 0x0255,
    0x0257, 0x0259, 0x025c, 0x025e, 0x0260, 0x0262, 0x0264, 0x0267,
    0x0269, 0x026b, 0x026d, 0x026f, 0x0272, 0x0274, 0x0276, 0x0279,
    0x027b, 0x027d, 0x027f, 0x0282, 0x0284, 0x0286, 0x0289, 0x028b,
    0x028d, 0x0290, 0x0292, 0x0295, 0x0297, 0x0299, 0x029c, 0x029e,
    0x02a1, 0x02a3, 0x02a5, 0x02a8, 0x02aa, 0x02ad, 0x02af, 0x02b2,
    0x02b4, 0x02b7, 0x02b9, 0x02bc, 0x02be, 0x02c1, 0x02c3, 0x02c6,
    0x02c9, 0x02cb, 0x02ce, 0x02d0, 0x02d3, 0x02d6, 0x02d8, 0x02db,
    0x02dd, 0x02e0, 0x02e3, 0x02e5, 0x02e8, 0x02eb, 0x02ed, 0x02f0,
    0x02f3, 0x02f6, 0x02f8, 0x02fb, 0x02fe, 0x0301, 0x0303, 0x0306,
    0x0309, 0x030c, 0x030f, 0x0311, 0x0314, 0x0317, 0x031a, 0x031d,
    0x0320, 0x0323, 0x0326, 0x0329, 0x032b, 0x032e, 0x0331, 0x0334,
    0x0337, 0x033a, 0x033d, 0x0340, 0x0343, 0x0346, 0x0349, 0x034c,
    0x034f, 0x0352, 0x0356, 0x0359, 0x035c, 0x035f, 0x0362, 0x0365,
    0x0368, 0x036b, 0x036f, 0x0372, 0x0375, 0x0378, 0x037b, 0x037f,
    0x0382, 0x0385, 0x0388, 0x038c, 0x038f, 0x0392, 0x0395, 0x0399,
    0x039c, 0x039f, 0x03a3, 0x03a6, 0x03a9, 0x03ad, 0x03b0, 0x03b4,
    0x03b7, 0x03bb, 0x03be, 0x03c1, 0x03c5, 0x03c8, 0x03cc, 0x03cf,
    0x03d3, 0x03d7, 0x03da, 0x03de, 0x03e1, 0x03e5, 0x03e8, 0x03ec,
    0x03f0, 0x03f3, 0x03f7, 0x03fb, 0x03fe, 0x0601, 0x0603, 0x0605,
    0x0607, 0x0608, 0x060a, 0x060c, 0x060e, 0x0610, 0x0612, 0x0614,
    0x0616, 0x0618, 0x061a, 0x061c, 0x061e, 0x0620, 0x0621, 0x0623,
    0x0625, 0x0627, 0x0629, 0x062b, 0x062d, 0x062f, 0x0631, 0x0634,
    0x0636, 0x0638, 0x063a, 0x063c, 0x063e, 0x0640, 0x0642, 0x0644,
    0x0646, 0x0648, 0x064a, 0x064c, 0x064f, 0x0651, 0x0653, 0x0655,
    0x0657, 0x0659, 0x065c, 0x065e, 0x0660, 0x0662, 0x0664, 0x0667,
    0x0669, 0x066b, 0x066d, 0x066f, 0x0672, 0x0674, 0x0676, 0x0679,
    0x067b, 0x067d, 0x067f, 0x0682, 0x0684, 0x0686, 0x0689, 0x068b,
    0x068d, 0x0690, 0x0692, 0x0695, 0x0697, 0x0699, 0x069c, 0x069e,
    0x06a1, 0x06a3, 0x06a5, 0x06a8, 0x06aa, 0x06ad, 0x06af, 0x06b2,
    0x06b4, 0x06b7, 0x06b9, 0x06bc, 0x06be, 0x06c1, 0x06c3, 0x06c6,
    0x06c9, 0x06cb, 0x06ce, 0x06d0, 0x06d3, 0x06d6, 0x06d8, 0x06db,
    0x06dd, 0x06e0, 0x06e3, 0x06e5, 0x06e8, 0x06eb, 0x06ed, 0x06f0,
    0x06f3, 0x06f6, 0x06f8, 0x06fb, 0x06fe, 0x0701, 0x0703, 0x0706,
    0x0709, 0x070c, 0x070f, 0x0711, 0x0714, 0x0717, 0x071a, 0x071d,
    0x0720, 0x0723, 0x0726, 0x0729, 0x072b, 0x072e, 0x0731, 0x0734,
    0x0737, 0x073a, 0x073d, 0x0740, 0x0743, 0x0746, 0x0749, 0x074c,
    0x074f, 0x0752, 0x0756, 0x0759, 0x075c, 0x075f, 0x0762, 0x0765,
    0x0768, 0x076b, 0x076f, 0x0772, 0x0775, 0x0778, 0x077b, 0x077f,
    0x0782, 0x0785, 0x0788, 0x078c, 0x078f, 0x0792, 0x0795, 0x0799,
    0x079c, 0x079f, 0x07a3, 0x07a6, 0x07a9, 0x07ad, 0x07b0, 0x07b4,
    0x07b7, 0x07bb, 0x07be, 0x07c1, 0x07c5, 0x07c8, 0x07cc, 0x07cf,
    0x07d3, 0x07d7, 0x07da, 0x07de, 0x07e1, 0x07e5, 0x07e8, 0x07ec,
    0x07f0, 0x07f3, 0x07f7, 0x07fb, 0x07fe, 0x0a01, 0x0a03, 0x0a05,
    0x0a07, 0x0a08, 0x0a0a, 0x0a0c, 0x0a0e, 0x0a10, 0x0a12, 0x0a14,
    0x0a16, 0x0a18, 0x0a1a, 0x0a1c, 0x0a1e, 0x0a20, 0x0a21, 0x0a23,
    0x0a25, 0x0a27, 0x0a29, 0x0a2b, 0x0a2d, 0x0a2f, 0x0a31, 0x0a34,
    0x0a36, 0x0a38, 0x0a3a, 0x0a3c, 0x0a3e, 0x0a40, 0x0a42, 0x0a44,
    0x0a46, 0x0a48, 0x0a4a, 0x0a4c, 0x0a4f, 0x0a51, 0x0a53, 0x0a55,
    0x0a57, 0x0a59, 0x0a5c, 0x0a5e, 0x0a60, 0x0a62, 0x0a64, 0x0a67,
    0x0a69, 0x0a6b, 0x0a6d, 0x0a6f, 0x0a72, 0x0a74, 0x0a76, 0x0a79,
    0x0a7b, 0x0a7d, 0x0a7f, 0x0a82, 0x0a84, 0x0a86, 0x0a89, 0x0a8b,
    0x0a8d, 0x0a90, 0x0a92, 0x0a95, 0x0a97, 0x0a99, 0x0a9c, 0x0a9e,
    0x0aa1, 0x0aa3, 0x0aa5, 0x0aa8, 0x0aaa, 0x0aad, 0x0aaf, 0x0ab2,
    0x0ab4, 0x0ab7, 0x0ab9, 0x0abc, 0x0abe, 0x0ac1, 0x0ac3, 0x0ac6,
    0x0ac9, 0x0acb, 0x0ace, 0x0ad0, 0x0ad3, 0x0ad6, 0x0ad8, 0x0adb,
    0x0add, 0x0ae0, 0x0ae3, 0x0ae5, 0x0ae8, 0x0aeb, 0x0aed, 0x0af0,
    0x0af3, 0x0af6, 0x0af8, 0x0afb, 0x0afe, 0x0b01, 0x0b03, 0x0b06,
    0x0b09, 0x0b0c, 0x0b0f, 0x0b11, 0x0b14, 0x0b17, 0x0b1a, 0x0b1d,
    0x0b20, 0x0b23, 0x0b26, 0x0b29, 0x0b2b, 0x0b2e, 0x0b31, 0x0b34,
    0x0b37, 0x0b3a, 0x0b3d, 0x0b40, 0x0b43, 0x0b46, 0x0b49, 0x0b4c,
    0x0b4f, 0x0b52, 0x0b56, 0x0b59, 0x0b5c, 0x0b5f, 0x0b62, 0x0b65,
    0x0b68, 0x0b6b, 0x0b6f, 0x0b72, 0x0b75, 0x0b78, 0x0b7b, 0x0b7f,
    0x0b82, 0x0b85, 0x0b88, 0x0b8c, 0x0b8f, 0x0b92, 0x0b95, 0x0b99,
    0x0b9c, 0x0b9f, 0x0ba3, 0x0ba6, 0x0ba9, 0x0bad, 0x0bb0, 0x0bb4,
    0x0bb7, 0x0bbb, 0x0bbe, 0x0bc1, 0x0bc5, 0x0bc8, 0x0bcc, 0x0bcf,
    0x0bd3, 0x0bd7, 0x0bda, 0x0bde, 0x0be1, 0x0be5, 0x0be8, 0x0bec,
    0x0bf0, 0x0bf3, 0x0bf7, 0x0bfb, 0x0bfe, 0x0e01, 0x0e03, 0x0e05,
    0x0e07, 0x0e08, 0x0e0a, 0x0e0c, 0x0e0e, 0x0e10, 0x0e12, 0x0e14,
    0x0e16, 0x0e18, 0x0e1a, 0x0e1c, 0x0e1e, 0x0e20, 0x0e21, 0x0e23,
    0x0e25, 0x0e27, 0x0e29, 0x0e2b, 0x0e2d, 0x0e2f, 0x0e31, 0x0e34,
    0x0e36, 0x0e38, 0x0e3a, 0x0e3c, 0x0e3e, 0x0e40, 0x0e42, 0x0e44,
    0x0e46, 0x0e48, 0x0e4a, 0x0e4c, 0x0e4f, 0x0e51, 0x0e53, 0x0e55,
    0x0e57, 0x0e59, 0x0e5c, 0x0e5e, 0x0e60, 0x0e62, 0x0e64, 0x0e67,
    0x0e69, 0x0e6b, 0x0e6d, 0x0e6f, 0x0e72, 0x0e74, 0x0e76, 0x0e79,
    0x0e7b, 0x0e7d, 0x0e7f, 0x0e82, 0x0e84, 0x0e86, 0x0e89, 0x0e8b,
    0x0e8d, 0x0e90, 0x0e92, 0x0e95, 0x0e97, 0x0e99, 0x0e9c, 0x0e9e,
    0x0ea1, 0x0ea3, 0x0ea5, 0x0ea8, 0x0eaa, 0x0ead, 0x0eaf, 0x0eb2,
    0x0eb4, 0x0eb7, 0x0eb9, 0x0ebc, 0x0ebe, 0x0ec1, 0x0ec3, 0x0ec6,
    0x0ec9, 0x0ecb, 0x0ece, 0x0ed0, 0x0ed3, 0x0ed6, 0x0ed8, 0x0edb,
    0x0edd, 0x0ee0, 0x0ee3, 0x0ee5, 0x0ee8, 0x0eeb, 0x0eed, 0x0ef0,
    0x0ef3, 0x0ef6, 0x0ef8, 0x0efb, 0x0efe, 0x0f01, 0x0f03, 0x0f06,
    0x0f09, 0x0f0c, 0x0f0f, 0x0f11, 0x0f14, 0x0f17, 0x0f1a, 0x0f1d,
    0x0f20, 0x0f23, 0x0f26, 0x0f29, 0x0f2b, 0x0f2e, 0x0f31, 0x0f34,
    0x0f37, 0x0f3a, 0x0f3d, 0x0f40, 0x0f43, 0x0f46, 0x0f49, 0x0f4c,
    0x0f4f, 0x0f52, 0x0f56, 0x0f59, 0x0f5c, 0x0f5f, 0x0f62, 0x0f65,
    0x0f68, 0x0f6b, 0x0f6f, 0x0f72, 0x0f75, 0x0f78, 0x0f7b, 0x0f7f,
    0x0f82, 0x0f85, 0x0f88, 0x0f8c, 0x0f8f, 0x0f92, 0x0f95, 0x0f99,
    0x0f9c, 0x0f9f, 0x0fa3, 0x0fa6, 0x0fa9, 0x0fad, 0x0fb0, 0x0fb4,
    0x0fb7, 0x0fbb, 0x0fbe, 0x0fc1, 0x0fc5, 0x0fc8, 0x0fcc, 0x0fcf,
    0x0fd3, 0x0fd7, 0x0fda, 0x0fde, 0x0fe1, 0x0fe5, 0x0fe8, 0x0fec,
    0x0ff0, 0x0ff3, 0x0ff7, 0x0ffb, 0x0ffe, 0x1201, 0x1203, 0x1205,
    0x1207, 0x1208, 0x120a, 0x120c, 0x120e, 0x1210, 0x1212, 0x1214,
    0x1216, 0x1218, 0x121a, 0x121c, 0x121e, 0x1220, 0x1221, 0x1223,
    0x1225, 0x1227, 0x1229, 0x122b, 0x122d, 0x122f, 0x1231, 0x1234,
    0x1236, 0x1238, 0x123a, 0x123c, 0x123e, 0x1240, 0x1242, 0x1244,
    0x1246, 0x1248, 0x124a, 0x124c, 0x124f, 0x1251, 0x1253, 0x1255,
    0x1257, 0x1259, 0x125c, 0x125e, 0x1260, 0x1262, 0x1264, 0x1267,
    0x1269, 0x126b, 0x126d, 0x126f, 0x1272, 0x1274, 0x1276, 0x1279,
    0x127b, 0x127d, 0x127f, 0x1282, 0x1284, 0x1286, 0x1289, 0x128b,
    0x128d, 0x1290, 0x1292, 0x1295, 0x1297, 0x1299, 0x129c, 0x129e,
    0x12a1, 0x12a3, 0x12a5, 0x12a8, 0x12aa, 0x12ad, 0x12af, 0x12b2,
    0x12b4, 0x12b7, 0x12b9, 0x12bc, 0x12be, 0x12c1, 0x12c3, 0x12c6,
    0x12c9, 0x12cb, 0x12ce, 0x12d0, 0x12d3, 0x12d6, 0x12d8, 0x12db,
    0x12dd, 0x12e0, 0x12e3, 0x12e5, 0x12e8, 0x12eb, 0x12ed, 0x12f0,
    0x12f3, 0x12f6, 0x12f8, 0x12fb, 0x12fe, 0x1301, 0x1303, 0x1306,
    0x1309, 0x130c, 0x130f, 0x1311, 0x1314, 0x1317, 0x131a, 0x131d,
    0x1320, 0x1323, 0x1326, 0x1329, 0x132b, 0x132e, 0x1331, 0x1334,
    0x1337, 0x133a, 0x133d, 0x1340, 0x1343, 0x1346, 0x1349, 0x134c,
    0x134f, 0x1352, 0x1356, 0x1359, 0x135c, 0x135f, 0x1362, 0x1365,
    0x1368, 0x136b, 0x136f, 0x1372, 0x1375, 0x1378, 0x137b, 0x137f,
    0x1382, 0x1385, 0x1388, 0x138c, 0x138f, 0x1392, 0x1395, 0x1399,
    0x139c, 0x139f, 0x13a3, 0x13a6, 0x13a9, 0x13ad, 0x13b0, 0x13b4,
    0x13b7, 0x13bb, 0x13be, 0x13c1, 0x13c5, 0x13c8, 0x13cc, 0x13cf,
    0x13d3, 0x13d7, 0x13da, 0x13de, 0x13e1, 0x13e5, 0x13e8, 0x13ec,
    0x13f0, 0x13f3, 0x13f7, 0x13fb, 0x13fe, 0x1601, 0x1603, 0x1605,
    0x1607, 0x1608, 0x160a, 0x160c, 0x160e, 0x1610, 0x1612, 0x1614,
    0x1616, 0x1618, 0x161a, 0x161c, 0x161e, 0x1620, 0x1621, 0x1623,
    0x1625, 0x1627, 0x1629, 0x162b, 0x162d, 0x162f, 0x1631, 0x1634,
    0x1636, 0x1638, 0x163a, 0x163c, 0x163e, 0x1640, 0x1642, 0x1644,
    0x1646, 0x1648, 0x164a, 0x164c, 0x164f, 0x1651, 0x1653, 0x1655,
    0x1657, 0x1659, 0x165c, 0x165e, 0x1660, 0x1662, 0x1664, 0x1667,
    0x1669, 0x166b, 0x166d, 0x166f, 0x1672, 0x1674, 0x1676, 0x1679,
    0x167b, 0x167d, 0x167f, 0x1682, 0x1684, 0x1686, 0x1689, 0x168b,
    0x168d, 0x1690, 0x1692, 0x1695, 0x1697, 0x1699, 0x169c, 0x169e,
    0x16a1, 0x16a3, 0x16a5, 0x16a8, 0x16aa, 0x16ad, 0x16af, 0x16b2,
    0x16b4, 0x16b7, 0x16b9, 0x16bc, 0x16be, 0x16c1, 0x16c3, 0x16c6,
    0x16c9, 0x16cb, 0x16ce, 0x16d0, 0x16d3, 0x16d6, 0x16d8, 0x16db,
    0x16dd, 0x16e0, 0x16e3, 0x16e5, 0x16e8, 0x16eb, 0x16ed, 0x16f0,
    0x16f3, 0x16f6, 0x16f8, 0x16fb, 0x16fe, 0x1701, 0x1703, 0x1706,
    0x1709, 0x170c, 0x170f, 0x1711, 0x1714, 0x1717, 0x171a, 0x171d,
    0x1720, 0x1723, 0x1726, 0x1729, 0x172b, 0x172e, 0x1731, 0x1734,
    0x1737, 0x173a, 0x173d, 0x1740, 0x1743, 0x1746, 0x1749, 0x174c,
    0x174f, 0x1752, 0x1756, 0x1759, 0x175c, 0x175f, 0x1762, 0x1765,
    0x1768, 0x176b, 0x176f, 0x1772, 0x1775, 0x1778, 0x177b, 0x177f,
    0x1782, 0x1785, 0x1788, 0x178c, 0x178f, 0x1792, 0x1795, 0x1799,
    0x179c, 0x179f, 0x17a3, 0x17a6, 0x17a9, 0x17ad, 0x17b0, 0x17b4,
    0x17b7, 0x17bb, 0x17be, 0x17c1, 0x17c5, 0x17c8, 0x17cc, 0x17cf,
    0x17d3, 0x17d7, 0x17da, 0x17de, 0x17e1, 0x17e5, 0x17e8, 0x17ec,
    0x17f0, 0x17f3, 0x17f7, 0x17fb, 0x17fe, 0x1a01, 0x1a03, 0x1a05,
    0x1a07, 0x1a08, 0x1a0a, 0x1a0c, 0x1a0e, 0x1a10, 0x1a12, 0x1a14,
    0x1a16, 0x1a18, 0x1a1a, 0x1a1c, 0x1a1e, 0x1a20, 0x1a21, 0x1a23,
    0x1a25, 0x1a27, 0x1a29, 0x1a2b, 0x1a2d, 0x1a2f, 0x1a31, 0x1a34,
    0x1a36, 0x1a38, 0x1a3a, 0x1a3c, 0x1a3e, 0x1a40, 0x1a42, 0x1a44,
    0x1a46, 0x1a48, 0x1a4a, 0x1a4c, 0x1a4f, 0x1a51, 0x1a53, 0x1a55,
    0x1a57, 0x1a59, 0x1a5c, 0x1a5e, 0x1a60, 0x1a62, 0x1a64, 0x1a67,
    0x1a69, 0x1a6b, 0x1a6d, 0x1a6f, 0x1a72, 0x1a74, 0x1a76, 0x1a79,
    0x1a7b, 0x1a7d, 0x1a7f, 0x1a82, 0x1a84, 0x1a86, 0x1a89, 0x1a8b,
    0x1a8d, 0x1a90, 0x1a92, 0x1a95, 0x1a97, 0x1a99, 0x1a9c, 0x1a9e,
    0x1aa1, 0x1aa3, 0x1aa5, 0x1aa8, 0x1aaa, 0x1aad, 0x1aaf, 0x1ab2,
    0x1ab4, 0x1ab7, 0x1ab9, 0x1abc, 0x1abe, 0x1ac1, 0x1ac3, 0x1ac6,
    0x1ac9, 0x1acb, 0x1ace, 0x1ad0, 0x1ad3, 0x1ad6, 0x1ad8, 0x1adb,
    0x1add, 0x1ae0, 0x1ae3, 0x1ae5, 0x1ae8, 0x1aeb, 0x1aed, 0x1af0,
    0x1af3, 0x1af6, 0x1af8, 0x1afb, 0x1afe, 0x1b01, 0x1b03, 0x1b06,
    0x1b09, 0x1b0c, 0x1b0f, 0x1b11, 0x1b14, 0x1b17, 0x1b1a, 0x1b1d,
    0x1b20, 0x1b23, 0x1b26, 0x1b29, 0x1b2b, 0x1b2e, 0x1b31, 0x1b34,
    0x1b37, 0x1b3a, 0x1b3d, 0x1b40, 0x1b43, 0x1b46, 0x1b49, 0x1b4c,
    0x1b4f, 0x1b52, 0x1b56, 0x1b59, 0x1b5c, 0x1b5f, 0x1b62, 0x1b65,
    0x1b68, 0x1b6b, 0x1b6f, 0x1b72, 0x1b75, 0x1b78, 0x1b7b, 0x1b7f,
    0x1b82, 0x1b85, 0x1b88, 0x1b8c, 0x1b8f, 0x1b92, 0x1b95, 0x1b99,
    0x1b9c, 0x1b9f, 0x1ba3, 0x1ba6, 0x1ba9, 0x1bad, 0x1bb0, 0x1bb4,
    0x1bb7, 0x1bbb, 0x1bbe, 0x1bc1, 0x1bc5, 0x1bc8, 0x1bcc, 0x1bcf,
    0x1bd3, 0x1bd7, 0x1bda, 0x1bde, 0x1be1, 0x1be5, 0x1be8, 0x1bec,
    0x1bf0, 0x1bf3, 0x1bf7, 0x1bfb, 0x1bfe, 0x1e01, 0x1e03, 0x1e05,
    0x1e07, 0x1e08, 0x1e0a, 0x1e0c, 0x1e0e, 0x1e10, 0x1e12, 0x1e14,
    0x1e16, 0x1e18, 0x1e1a, 0x1e1c, 0x1e1e, 0x1e20, 0x1e21, 0x1e23,
    0x1e25, 0x1e27, 0x1e29, 0x1e2b, 0x1e2d, 0x1e2f, 0x1e31, 0x1e34,
    0x1e36, 0x1e38, 0x1e3a, 0x1e3c, 0x1e3e, 0x1e40, 0x1e42, 0x1e44,
    0x1e46, 0x1e48, 0x1e4a, 0x1e4c, 0x1e4f, 0x1e51, 0x1e53, 0x1e55,
    0x1e57, 0x1e59, 0x1e5c, 0x1e5e, 0x1e60, 0x1e62, 0x1e64, 0x1e67,
    0x1e69, 0x1e6b, 0x1e6d, 0x1e6f, 0x1e72, 0x1e74, 0x1e76, 0x1e79,
    0x1e7b, 0x1e7d, 0x1e7f, 0x1e82, 0x1e84, 0x1e86, 0x1e89, 0x1e8b,
    0x1e8d, 0x1e90, 0x1e92, 0x1e95, 0x1e97, 0x1e99, 0x1e9c, 0x1e9e,
    0x1ea1, 0x1ea3, 0x1ea5, 0x1ea8, 0x1eaa, 0x1ead, 0x1eaf, 0x1eaf,
];

/// Mapping from a 0-127 MIDI volume/velocity value to an OPL attenuation
/// step (used for both note velocity and channel volume).
pub const VOLUME_MAPPING_TABLE: [u8; 128] = [
    0, 1, 3, 5, 6, 8, 10, 11,
    13, 14, 16, 17, 19, 20, 22, 23,
    25, 26, 27, 29, 30, 32, 33, 34,
    36, 37, 39, 41, 43, 45, 47, 49,
    50, 52, 54, 55, 57, 59, 60, 61,
    63, 64, 66, 67, 68, 69, 71, 72,
    73, 74, 75, 76, 77, 79, 80, 81,
    82, 83, 84, 84, 85, 86, 87, 88,
    89, 90, 91, 92, 92, 93, 94, 95,
    96, 96, 97, 98, 99, 99, 100, 101,
    101, 102, 103, 103, 104, 105, 105, 106,
    107, 107, 108, 109, 109, 110, 110, 111,
    112, 112, 113, 113, 114, 114, 115, 115,
    116, 117, 117, 118, 118, 119, 119, 120,
    120, 121, 121, 122, 122, 123, 123, 123,
    124, 124, 125, 125, 126, 126, 127, 127,
];

/// Number of entries per octave in the looped section of [`FREQUENCY_CURVE`].
const NOTES_PER_OCTAVE_LOOP: i32 = 12 * 32;
/// Index at which the looped section of [`FREQUENCY_CURVE`] begins.
const LOOP_START: i32 = 284;

/// Compute the OPL frequency register value (F-number in the low 10 bits,
/// block/octave in bits 10-12) for a voice's current note, pitch bend and
/// (for the second voice of a double-voice instrument) fine tuning.
///
/// `note` and `bend` are signed so callers can pass values already offset
/// by the instrument's `base_note_offset` and the channel's pitch bend
/// without needing to special-case underflow themselves.
pub fn frequency_for_note(
    note: i32,
    bend: i32,
    fine_tuning: u8,
    is_second_voice: bool,
    beta: bool,
) -> u16 {
    // Clamp the note into the representable range; base_note_offset can
    // push it outside 0..=95 so we fold it back by octaves rather than
    // just clamping, matching the original driver.
    let mut note = note;
    while note < 0 {
        note += 12;
    }
    while note > 95 {
        note -= 12;
    }

    if beta {
        let mut freq_index = 15 + 16 * note + bend;

        if is_second_voice {
            let mut tune = fine_tuning as i32;
            if tune >= 128 {
                tune += 3;
            }
            freq_index += tune / 4 - 32;
        }

        let freq_index = freq_index.clamp(0, 1551) as usize;
        return FREQUENCY_CURVE_BETA[freq_index];
    }

    let mut freq_index = 64 + 32 * note + bend;

    if is_second_voice {
        freq_index += (fine_tuning as i32 / 2) - 64;
    }

    if freq_index < 0 {
        freq_index = 0;
    }

    if freq_index < LOOP_START {
        return FREQUENCY_CURVE[freq_index as usize];
    }

    let sub_index = (freq_index - LOOP_START) % NOTES_PER_OCTAVE_LOOP;
    let mut octave = (freq_index - LOOP_START) / NOTES_PER_OCTAVE_LOOP;
    if octave >= 7 {
        octave = 7;
    }

    FREQUENCY_CURVE[(sub_index + LOOP_START) as usize] | ((octave as u16) << 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths_match_original() {
        assert_eq!(FREQUENCY_CURVE.len(), 668);
        assert_eq!(FREQUENCY_CURVE_BETA.len(), 1552);
        assert_eq!(VOLUME_MAPPING_TABLE.len(), 128);
    }

    #[test]
    fn buffer_overrun_entry_is_preserved() {
        assert_eq!(*FREQUENCY_CURVE.last().unwrap(), 0x36c);
    }

    #[test]
    fn middle_c_uses_direct_table_range() {
        // note=0, bend=0 lands well inside the non-looped range.
        let freq = frequency_for_note(0, 0, 0, false, false);
        assert_eq!(freq, FREQUENCY_CURVE[64]);
    }

    #[test]
    fn high_octave_caps_block_at_seven() {
        let freq = frequency_for_note(95, 0, 0, false, false);
        assert_eq!(freq >> 10, 7);
    }

    #[test]
    fn beta_curve_clamps_to_last_index() {
        let freq = frequency_for_note(95, 10_000, 0, false, true);
        assert_eq!(freq, FREQUENCY_CURVE_BETA[1551]);
    }

    #[test]
    fn note_offset_wraps_by_octave_not_clamp() {
        // -13 should fold up to -1 (add 12), not saturate to 0.
        let wrapped = frequency_for_note(-13, 0, 0, false, false);
        let direct = frequency_for_note(-1, 0, 0, false, false);
        assert_eq!(wrapped, direct);
    }
}
