//! PyInstaller spec template.

/// Spec file template. List values are pre-rendered as Python literals.
pub const SPEC_TEMPLATE: &str = r#"# -*- mode: python ; coding: utf-8 -*-

import sys
from pathlib import Path

block_cipher = None

# Determine the appropriate name for the executable
exe_name = {{product_name}}
if sys.platform.startswith('win'):
    exe_name += '.exe'

a = Analysis(
    [{{entry_point}}],
    pathex={{pathex}},
    binaries=[],
    datas={{datas}},
    hiddenimports={{hidden_imports}},
    hookspath=[],
    hooksconfig={},
    runtime_hooks=[],
    excludes={{excludes}},
    win_no_prefer_redirects=False,
    win_private_assemblies=False,
    cipher=block_cipher,
    noarchive=False,
)

pyz = PYZ(a.pure, a.zipped_data, cipher=block_cipher)

exe = EXE(
    pyz,
    a.scripts,
    a.binaries,
    a.zipfiles,
    a.datas,
    [],
    name=exe_name,
    debug=False,
    bootloader_ignore_signals=False,
    strip=False,
    upx={{upx}},
    upx_exclude=[],
    runtime_tmpdir=None,
    console={{console}},
    disable_windowed_traceback=False,
    argv_emulation=False,
    target_arch=None,
    codesign_identity=None,
    entitlements_file=None,
    icon=None,
)
"#;
